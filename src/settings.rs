use std::env;

const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub api_key: String,
    pub language: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            language: String::from(DEFAULT_LANGUAGE),
        }
    }
}

impl AppSettings {
    /// Read settings from the environment, loading a `.env` file first if
    /// one is present. `TMDB_API_KEY` is required for a valid configuration;
    /// `TMDB_LANGUAGE` falls back to `en-US`.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            api_key: env::var("TMDB_API_KEY").unwrap_or_default(),
            language: env::var("TMDB_LANGUAGE")
                .ok()
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| String::from(DEFAULT_LANGUAGE)),
        }
    }

    pub fn is_valid(&self) -> bool {
        !self.api_key.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_api_key_is_invalid() {
        assert!(!AppSettings::default().is_valid());
        let settings = AppSettings {
            api_key: String::from("   "),
            ..Default::default()
        };
        assert!(!settings.is_valid());
    }

    #[test]
    fn key_makes_settings_valid() {
        let settings = AppSettings {
            api_key: String::from("abc123"),
            ..Default::default()
        };
        assert!(settings.is_valid());
        assert_eq!(settings.language, "en-US");
    }
}
