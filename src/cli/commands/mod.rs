mod analyze;
mod ask;
mod humanize;

pub use analyze::cmd_analyze;
pub use ask::cmd_ask;
pub use humanize::cmd_humanize;
