use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use crate::{Error, Result};

pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_MAX_TOKENS: &str = "OPENAI_MAX_TOKENS";
pub const OPENAI_TEMPERATURE: &str = "OPENAI_TEMPERATURE";
pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_API_URL: &str = "OPENAI_API_URL";
pub const OPENAI_SYSTEM_PROMPT: &str = "OPENAI_SYSTEM_PROMPT";
pub const OPENAI_INSTRUCTION: &str = "OPENAI_INSTRUCTION";
pub const GET_CONTENT_API_URL: &str = "GET_CONTENT_API_URL";
pub const GET_CONTENT_API_KEY: &str = "GET_CONTENT_API_KEY";
pub const GET_CONTENT_API_KEY_HEADER: &str = "GET_CONTENT_API_KEY_HEADER";
pub const SAVE_CONTENT_API_URL: &str = "SAVE_CONTENT_API_URL";
pub const SAVE_CONTENT_API_KEY: &str = "SAVE_CONTENT_API_KEY";
pub const SAVE_CONTENT_API_KEY_HEADER: &str = "SAVE_CONTENT_API_KEY_HEADER";

/// Settings for the chat-completion endpoint.
#[derive(Clone)]
pub struct CompletionConfig {
    pub model: String,
    pub max_tokens: i64,
    pub temperature: f64,
    pub api_key: String,
    pub api_url: String,
    pub system_prompt: String,
    pub instruction: String,
}

impl fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .field("api_key", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("system_prompt", &self.system_prompt)
            .field("instruction", &self.instruction)
            .finish()
    }
}

/// A remote API reached with a single key header whose name is configurable.
#[derive(Clone)]
pub struct EndpointConfig {
    pub url: String,
    pub api_key: String,
    pub api_key_header: String,
}

impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("url", &self.url)
            .field("api_key", &"<redacted>")
            .field("api_key_header", &self.api_key_header)
            .finish()
    }
}

/// Immutable configuration snapshot, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub completion: CompletionConfig,
    pub get_content: EndpointConfig,
    pub save_content: EndpointConfig,
}

impl Config {
    /// Loads `.env` from the working directory (if any), then reads the
    /// process environment. Variables already set take precedence.
    pub fn from_env() -> Result<Self> {
        if let Some(warning) = dotenv_warning(dotenvy::dotenv()) {
            tracing::warn!("{}", warning);
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).ok_or_else(|| Error::Config(format!("{} is not set", key)))
        };

        Ok(Self {
            completion: CompletionConfig {
                model: required(OPENAI_MODEL)?,
                max_tokens: parse_number(OPENAI_MAX_TOKENS, &required(OPENAI_MAX_TOKENS)?)?,
                temperature: parse_number(OPENAI_TEMPERATURE, &required(OPENAI_TEMPERATURE)?)?,
                api_key: required(OPENAI_API_KEY)?,
                api_url: required(OPENAI_API_URL)?,
                system_prompt: required(OPENAI_SYSTEM_PROMPT)?,
                instruction: required(OPENAI_INSTRUCTION)?,
            },
            get_content: EndpointConfig {
                url: required(GET_CONTENT_API_URL)?,
                api_key: required(GET_CONTENT_API_KEY)?,
                api_key_header: required(GET_CONTENT_API_KEY_HEADER)?,
            },
            save_content: EndpointConfig {
                url: required(SAVE_CONTENT_API_URL)?,
                api_key: required(SAVE_CONTENT_API_KEY)?,
                api_key_header: required(SAVE_CONTENT_API_KEY_HEADER)?,
            },
        })
    }
}

/// A missing `.env` is normal; anything else (a malformed line, an unreadable
/// file) is worth a warning before the variables it held show up as unset.
fn dotenv_warning(loaded: std::result::Result<PathBuf, dotenvy::Error>) -> Option<String> {
    match loaded {
        Ok(path) => {
            tracing::debug!("Loaded environment from {}", path.display());
            None
        }
        Err(e) if e.not_found() => None,
        Err(e) => Some(format!("Ignoring .env file: {}", e)),
    }
}

fn parse_number<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("{} must be numeric, got {:?}: {}", key, raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn sample_env() -> HashMap<&'static str, String> {
        [
            (OPENAI_MODEL, "gpt-4"),
            (OPENAI_MAX_TOKENS, "512"),
            (OPENAI_TEMPERATURE, "0.2"),
            (OPENAI_API_KEY, "sk-secret"),
            (OPENAI_API_URL, "http://llm/v1/chat/completions"),
            (OPENAI_SYSTEM_PROMPT, "You are a librarian."),
            (OPENAI_INSTRUCTION, "Summarize and categorize."),
            (GET_CONTENT_API_URL, "http://fetch/content"),
            (GET_CONTENT_API_KEY, "fetch-secret"),
            (GET_CONTENT_API_KEY_HEADER, "X-Fetch-Key"),
            (SAVE_CONTENT_API_URL, "http://store/content"),
            (SAVE_CONTENT_API_KEY, "save-secret"),
            (SAVE_CONTENT_API_KEY_HEADER, "X-Save-Key"),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }

    fn load(env: &HashMap<&'static str, String>) -> Result<Config> {
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_reads_all_settings() {
        let config = load(&sample_env()).unwrap();
        assert_eq!(config.completion.model, "gpt-4");
        assert_eq!(config.completion.max_tokens, 512);
        assert!((config.completion.temperature - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.get_content.api_key_header, "X-Fetch-Key");
        assert_eq!(config.save_content.url, "http://store/content");
    }

    #[test]
    fn test_missing_variable_names_the_key() {
        let mut env = sample_env();
        env.remove(SAVE_CONTENT_API_KEY_HEADER);
        let err = load(&env).unwrap_err();
        assert!(matches!(err, Error::Config(ref m) if m.contains(SAVE_CONTENT_API_KEY_HEADER)));
    }

    #[test]
    fn test_non_numeric_values_are_rejected() {
        let mut env = sample_env();
        env.insert(OPENAI_MAX_TOKENS, "lots".to_string());
        assert!(matches!(load(&env), Err(Error::Config(_))));

        let mut env = sample_env();
        env.insert(OPENAI_TEMPERATURE, "warm".to_string());
        let err = load(&env).unwrap_err();
        assert!(err.to_string().contains(OPENAI_TEMPERATURE));
    }

    #[test]
    fn test_negative_max_tokens_is_coerced() {
        let mut env = sample_env();
        env.insert(OPENAI_MAX_TOKENS, "-1".to_string());
        assert_eq!(load(&env).unwrap().completion.max_tokens, -1);
    }

    #[test]
    fn test_dotenv_warning_only_for_broken_files() {
        assert!(dotenv_warning(Ok(PathBuf::from(".env"))).is_none());

        let missing = dotenvy::Error::Io(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(dotenv_warning(Err(missing)).is_none());

        let malformed = dotenvy::Error::LineParse("OPENAI_MODEL gpt-4".to_string(), 12);
        let warning = dotenv_warning(Err(malformed)).unwrap();
        assert!(warning.starts_with("Ignoring .env file"));
        assert!(warning.contains("OPENAI_MODEL gpt-4"));
    }

    #[test]
    fn test_debug_redacts_keys() {
        let config = load(&sample_env()).unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("X-Save-Key"));
    }
}
