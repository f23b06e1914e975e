use crate::nlp::TextAnalyzer;

pub fn cmd_analyze(text: &str) -> anyhow::Result<()> {
    let analysis = TextAnalyzer::new().analyze(text);
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}
