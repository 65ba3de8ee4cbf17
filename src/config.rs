use std::env;

const DEFAULT_PROMPT: &str = ">> ";

pub const PROMPT_VAR: &str = "CALC_PROMPT";
pub const STRICT_VAR: &str = "CALC_STRICT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub prompt: String,
    // fail on the first unrecognized character instead of skipping it
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            strict: false,
        }
    }
}

impl Config {
    /// Reads the process environment. Call after `dotenvy::dotenv()` so that
    /// values from a `.env` file are visible.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let default = Config::default();
        Config {
            prompt: lookup(PROMPT_VAR).unwrap_or(default.prompt),
            strict: lookup(STRICT_VAR)
                .map(|v| is_truthy(&v))
                .unwrap_or(default.strict),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(config_from(&[]), Config::default());
        assert_eq!(Config::default().prompt, ">> ");
        assert!(!Config::default().strict);
    }

    #[test]
    fn reads_prompt() {
        let config = config_from(&[(PROMPT_VAR, "calc> ")]);
        assert_eq!(config.prompt, "calc> ");
    }

    #[test]
    fn reads_strict_flag() {
        for value in ["1", "true", "TRUE", " yes ", "on"] {
            assert!(config_from(&[(STRICT_VAR, value)]).strict, "{:?}", value);
        }
        for value in ["0", "false", "", "nope"] {
            assert!(!config_from(&[(STRICT_VAR, value)]).strict, "{:?}", value);
        }
    }
}
