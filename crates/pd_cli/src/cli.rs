use clap::Parser;

/// Fetch a page, summarize and categorize it with a language model, and save the result.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// The URL to fetch, summarize and save
    #[arg(value_parser = non_empty_string)]
    pub url: String,
}

fn non_empty_string(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("The argument provided cannot be an empty string".to_string());
    }
    Ok(s.to_string())
}
