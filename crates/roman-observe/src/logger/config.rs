use std::io::IsTerminal;

use crate::logger::{error::LoggerError, format::LoggerFormat, log::mk_filter};

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` directive string, e.g. `info` or `info,roman_api=debug`.
    pub level: String,
    pub with_targets: bool,
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        let use_color = cfg!(test) || std::io::stdout().is_terminal();
        Self {
            format: LoggerFormat::Text,
            level: "info".to_string(),
            with_targets: true,
            use_color,
        }
    }
}

impl LoggerConfig {
    /// Check that `level` is a valid filter directive.
    pub fn validate(&self) -> Result<(), LoggerError> {
        mk_filter(&self.level).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid_text_info() {
        let cfg = LoggerConfig::default();
        assert_eq!(cfg.format, LoggerFormat::Text);
        assert_eq!(cfg.level, "info");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn directive_levels_are_accepted() {
        let cfg = LoggerConfig {
            level: "warn,roman_api=debug".into(),
            ..Default::default()
        };
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn bad_level_is_rejected() {
        let cfg = LoggerConfig {
            level: "roman_api=loud".into(),
            ..Default::default()
        };
        assert_eq!(
            cfg.validate().unwrap_err(),
            LoggerError::InvalidLogLevel("roman_api=loud".into())
        );
    }
}
