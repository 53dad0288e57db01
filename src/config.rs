//! Optional TOML configuration file.
//!
//! Looked up at `$CONFIG_DIR/pincell/config.toml` unless a path is given explicitly.
//! Every key is optional; values present in the file are applied on top of the built-in
//! defaults and command-line flags are applied after that.

use crate::app::AppSettings;
use crate::error::{PincellError, Result};
use crate::pin::{CompletionMode, PinLength};
use crate::render::PinStyles;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Raw contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub pin_length: Option<usize>,
    pub auto_focus: Option<bool>,
    pub secure: Option<bool>,
    pub completion: Option<String>,
    pub clear_on_complete: Option<bool>,
    pub theme: Option<String>,
}

impl FileConfig {
    /// Parse configuration from TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| PincellError::config(err.to_string()))
    }

    /// Default location of the configuration file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pincell").join("config.toml"))
    }

    /// Load an explicit path (must exist) or the default path (may be missing).
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(PincellError::ConfigNotFound {
                        path: path.to_path_buf(),
                    });
                }
                Self::read(path)
            }
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::read(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|err| PincellError::io(format!("reading {}", path.display()), err))?;
        log::debug!("Loaded configuration from {}", path.display());
        Self::parse(&text)
    }

    /// Apply the values present in the file to `settings`.
    pub fn apply_to(&self, settings: &mut AppSettings) -> Result<()> {
        if let Some(length) = self.pin_length {
            settings.pin_length = PinLength::new(length)
                .map_err(|_| PincellError::config("pin_length must be at least 1"))?
                .get();
        }
        if let Some(auto_focus) = self.auto_focus {
            settings.auto_focus = auto_focus;
        }
        if let Some(secure) = self.secure {
            settings.secure = secure;
        }
        if let Some(completion) = &self.completion {
            settings.completion = completion.parse::<CompletionMode>()?;
        }
        if let Some(clear) = self.clear_on_complete {
            settings.clear_on_complete = clear;
        }
        if let Some(theme) = &self.theme {
            PinStyles::named(theme)?;
            settings.theme = theme.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_file() {
        let config = FileConfig::parse(
            r#"
            pin_length = 4
            auto_focus = false
            secure = true
            completion = "level"
            clear_on_complete = true
            theme = "monochrome"
            "#,
        )
        .unwrap();

        let mut settings = AppSettings::default();
        config.apply_to(&mut settings).unwrap();

        assert_eq!(settings.pin_length, 4);
        assert!(!settings.auto_focus);
        assert!(settings.secure);
        assert_eq!(settings.completion, CompletionMode::Level);
        assert!(settings.clear_on_complete);
        assert_eq!(settings.theme, "monochrome");
    }

    #[test]
    fn test_empty_file_keeps_defaults() {
        let config = FileConfig::parse("").unwrap();
        let mut settings = AppSettings::default();
        config.apply_to(&mut settings).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_bad_values_are_config_errors() {
        let unknown_key = FileConfig::parse("digits = 4");
        assert!(matches!(unknown_key, Err(PincellError::ConfigError { .. })));

        let mut settings = AppSettings::default();
        for text in ["pin_length = 0", "completion = \"rarely\"", "theme = \"neon\""] {
            let config = FileConfig::parse(text).unwrap();
            assert!(
                matches!(
                    config.apply_to(&mut settings),
                    Err(PincellError::ConfigError { .. })
                ),
                "expected config error for {text}"
            );
        }
    }

    #[test]
    fn test_load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        writeln!(file, "pin_length = 8").expect("write config");

        let config = FileConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.pin_length, Some(8));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            FileConfig::load(Some(&missing)),
            Err(PincellError::ConfigNotFound { .. })
        ));
    }
}
