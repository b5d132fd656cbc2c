use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// How `leozin render` prints the rendered nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderFormat {
    /// Styled terminal output with clickable links
    #[default]
    Terminal,
    /// Visible text only
    Plain,
    /// Escaped HTML fragment
    Html,
    /// Display nodes as JSON
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "leozin",
    about = "Chat assistant for the Jovem Programador program",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Explicit config file, merged over the default locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Use the high-contrast palette
    #[arg(long, global = true)]
    pub high_contrast: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render one message and print it
    Render {
        /// Message text; read from stdin when omitted
        text: Option<String>,

        #[arg(long, short = 'f', value_enum, default_value_t)]
        format: RenderFormat,
    },

    /// Start an interactive chat session
    Chat {
        /// Answer from the local responder only, never call the backend
        #[arg(long)]
        offline: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["leozin", "render", "**oi**", "--format", "html"]).unwrap();
        match cli.command {
            Commands::Render { text, format } => {
                assert_eq!(text.as_deref(), Some("**oi**"));
                assert_eq!(format, RenderFormat::Html);
            }
            _ => panic!("Expected Render"),
        }
    }

    #[test]
    fn test_parse_chat_global_flags() {
        let cli = Cli::try_parse_from(["leozin", "chat", "--offline", "-vv", "--high-contrast"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Chat { offline: true }));
        assert_eq!(cli.verbose, 2);
        assert!(cli.high_contrast);
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
