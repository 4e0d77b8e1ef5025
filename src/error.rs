use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Restyle operations
#[derive(Error, Debug)]
pub enum RestyleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// RuleSet construction errors. These are configuration defects and fail
/// fast before any file is touched; they are never raised per-file at
/// rewrite time.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Rule {index} has an invalid pattern: {source}")]
    BadPattern {
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("Rule {index} has an empty pattern")]
    EmptyPattern { index: usize },

    #[error("Failed to read rule file {path:?}: {source}")]
    UnreadableRuleFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Rule file {path:?} is not valid TOML: {message}")]
    InvalidRuleFile { path: PathBuf, message: String },
}

/// Discovery errors are fatal: without a pages root there is nothing to do.
#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Pages directory not found: {path:?}")]
    MissingRoot { path: PathBuf },

    #[error("Failed to read directory {path:?}: {message}")]
    Unreadable { path: PathBuf, message: String },
}

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type alias for Restyle operations
pub type RestyleResult<T> = Result<T, RestyleError>;

/// Error display helper for the CLI
pub fn display_error(error: &anyhow::Error) {
    use colored::Colorize;

    eprintln!(
        "\n{} {}",
        "✗".bright_red().bold(),
        "Operation failed".bright_red().bold()
    );
    eprintln!("  {} {}", "├".bright_black(), error);

    // Display error chain
    for cause in error.chain().skip(1) {
        eprintln!("  {} Caused by: {}", "├".bright_black(), cause);
    }

    // Add helpful hints based on error type
    match error.downcast_ref::<RestyleError>() {
        Some(RestyleError::Discovery(DiscoveryError::MissingRoot { path })) => {
            eprintln!(
                "  {} Check that {:?} exists, or point --path at the project root",
                "└".bright_cyan(),
                path
            );
        }
        Some(RestyleError::Rule(RuleError::BadPattern { index, .. })) => {
            eprintln!(
                "  {} Fix the pattern of rule {} in the rule file",
                "└".bright_cyan(),
                index
            );
        }
        Some(RestyleError::Config(_)) => {
            eprintln!("  {} Check restyle.toml for syntax errors", "└".bright_cyan());
        }
        _ => {
            eprintln!("  {} Run with RUST_LOG=debug for more details", "└".bright_black());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let error = RuleError::BadPattern { index: 7, source };

        let restyle_error = RestyleError::Rule(error);
        let display = format!("{}", restyle_error);

        assert!(display.contains("Rule 7"));
        assert!(display.contains("invalid pattern"));
    }

    #[test]
    fn test_discovery_error_display() {
        let error = DiscoveryError::MissingRoot {
            path: PathBuf::from("src/pages"),
        };

        let restyle_error = RestyleError::Discovery(error);
        let display = format!("{}", restyle_error);

        assert!(display.contains("Pages directory not found"));
        assert!(display.contains("src/pages"));
    }
}
