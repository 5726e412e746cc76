pub mod cli;
pub mod toml_config;

use crate::core::fetcher::DEFAULT_BASE_URL;
use crate::core::{ConfigProvider, Credential};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_required_field, validate_url, Validate,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use toml_config::FileConfig;
use url::Url;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "aoc-similarity")]
#[command(about = "Fetch the 2024 day 1 puzzle input and print its similarity score")]
pub struct CliConfig {
    #[arg(long, env = "SESSION", hide_env_values = true, help = "Session cookie value")]
    pub session: Option<Credential>,

    #[arg(long, help = "TOML file providing `session` and/or `base_url`")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Service root [default: https://adventofcode.com]")]
    pub base_url: Option<String>,

    #[arg(long, help = "Score a local input file instead of fetching")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(session) = &self.session {
            validate_non_empty_string("session", session.expose())?;
        }
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(input) = &self.input {
            validate_path("input", input)?;
        }
        Ok(())
    }
}

impl CliConfig {
    /// Merges flags and environment over the optional config file.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file {}", path.display());
                FileConfig::from_file(path)?
            }
            None => FileConfig::default(),
        };

        let base_url = self
            .base_url
            .as_deref()
            .or(file.base_url.as_deref())
            .unwrap_or(DEFAULT_BASE_URL);
        let base_url = validate_url("base_url", base_url)?;

        let credential = self.session.clone().or(file.session);
        if let Some(credential) = &credential {
            validate_non_empty_string("session", credential.expose())?;
        }

        Ok(Settings {
            base_url,
            credential,
            input: self.input.clone(),
        })
    }
}

/// Effective configuration after merging all sources.
#[derive(Debug, Clone)]
pub struct Settings {
    base_url: Url,
    credential: Option<Credential>,
    input: Option<PathBuf>,
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn credential(&self) -> Result<&Credential> {
        validate_required_field("session", &self.credential)
    }

    fn input_path(&self) -> Option<&Path> {
        self.input.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::AocError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_args() {
        let config = CliConfig::try_parse_from([
            "aoc-similarity",
            "--session",
            "abc",
            "--base-url",
            "http://localhost:1234",
            "--json",
        ])
        .unwrap();
        assert_eq!(config.session.as_ref().unwrap().expose(), "abc");
        assert_eq!(config.base_url.as_deref(), Some("http://localhost:1234"));
        assert!(config.json);
        assert!(!config.verbose);
    }

    #[test]
    fn test_defaults_without_session() {
        let settings = CliConfig::default().resolve().unwrap();
        assert_eq!(settings.base_url().as_str(), "https://adventofcode.com/");
        assert!(settings.input_path().is_none());
        assert!(matches!(
            settings.credential(),
            Err(AocError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_session_from_config_file() {
        let file = config_file("session = \"from-file\"\nbase_url = \"http://127.0.0.1:9\"\n");
        let config = CliConfig {
            config: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let settings = config.resolve().unwrap();
        assert_eq!(settings.credential().unwrap().expose(), "from-file");
        assert_eq!(settings.base_url().as_str(), "http://127.0.0.1:9/");
    }

    #[test]
    fn test_flags_override_config_file() {
        let file = config_file("session = \"from-file\"\nbase_url = \"http://127.0.0.1:9\"\n");
        let config = CliConfig {
            session: Some(Credential::new("from-flag")),
            config: Some(file.path().to_path_buf()),
            base_url: Some("http://localhost:8080".to_string()),
            ..Default::default()
        };
        let settings = config.resolve().unwrap();
        assert_eq!(settings.credential().unwrap().expose(), "from-flag");
        assert_eq!(settings.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn test_blank_session_is_rejected() {
        let config = CliConfig {
            session: Some(Credential::new("  ")),
            ..Default::default()
        };
        assert!(config.validate().is_err());
        assert!(config.resolve().is_err());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let config = CliConfig {
            base_url: Some("ftp://adventofcode.com".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AocError::InvalidConfigValueError { .. })
        ));
    }
}
