//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Precedence is CLI flag > environment variable > config file > default.
/// This struct captures the CLI/env layer; config file defaults are resolved
/// later in `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format override (table, json)
    pub format: Option<OutputFormat>,

    /// Custom config file path (defaults to ~/.inspecta/config.yaml)
    pub config: Option<String>,

    /// Backend base URL override
    pub api_host: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_host: cli.api_host.clone(),
        }
    }

    /// Output format: flag/env first, then the config preference, then table.
    pub fn resolve_format(&self, preferred: Option<&str>) -> OutputFormat {
        use clap::ValueEnum;

        self.format
            .or_else(|| preferred.and_then(|p| OutputFormat::from_str(p, true).ok()))
            .unwrap_or_default()
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get API host override as `Option<&str>`.
    pub fn api_host_ref(&self) -> Option<&str> {
        self.api_host.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_options_accessors() {
        let opts = GlobalOptions {
            format: Some(OutputFormat::Json),
            config: Some("/custom/path".to_string()),
            api_host: Some("http://localhost:9090".to_string()),
        };

        assert_eq!(opts.config_ref(), Some("/custom/path"));
        assert_eq!(opts.api_host_ref(), Some("http://localhost:9090"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: None,
            config: None,
            api_host: None,
        };

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.api_host_ref(), None);
    }

    #[test]
    fn test_resolve_format_precedence() {
        let mut opts = GlobalOptions {
            format: None,
            config: None,
            api_host: None,
        };
        assert_eq!(opts.resolve_format(None), OutputFormat::Table);
        assert_eq!(opts.resolve_format(Some("JSON")), OutputFormat::Json);
        assert_eq!(opts.resolve_format(Some("yaml")), OutputFormat::Table);

        opts.format = Some(OutputFormat::Table);
        assert_eq!(opts.resolve_format(Some("json")), OutputFormat::Table);
    }
}
