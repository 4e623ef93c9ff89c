//! CLI configuration.

use tracing::Level;

/// Log levels per target. Targets without an override follow `global`.
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub global: Level,
    pub lexer: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            global: Level::WARN,
            lexer: None,
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            "scanner::lexer" => self.lexer.unwrap_or(self.global),
            _ => self.global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::LogConfig;
    use tracing::Level;

    #[test]
    fn test_default_level_is_warn() {
        let config = LogConfig::default();

        assert_eq!(config.level_for("scanner::lexer"), Level::WARN);
        assert_eq!(config.level_for("scanner::cli"), Level::WARN);
    }

    #[test]
    fn test_lexer_override() {
        let config = LogConfig {
            global: Level::INFO,
            lexer: Some(Level::TRACE),
        };

        assert_eq!(config.level_for("scanner::lexer"), Level::TRACE);
        assert_eq!(config.level_for("scanner::cli"), Level::INFO);
    }
}
