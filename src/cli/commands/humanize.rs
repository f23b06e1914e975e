use crate::nlp::humanize;

pub fn cmd_humanize(text: &str) {
    println!("{}", humanize(text));
}
