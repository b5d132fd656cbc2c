mod chat;
mod cli;
mod tui;

use std::io::{self, IsTerminal, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands, RenderFormat};
use leozin_core::surface::{HtmlSurface, PlainSurface, TraceSurface};
use leozin_core::{config, materialize};

use crate::chat::ChatSession;
use crate::tui::printer::write_lines;
use crate::tui::{render_lines, Theme};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load(cli.config.as_deref())?;
    debug!(backend = %config.backend.url, labels = config.labels.len(), "configuration loaded");

    match cli.command {
        Commands::Render { text, format } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };
            run_render(&config, &text, format, cli.high_contrast)
        }
        Commands::Chat { offline } => {
            ChatSession::new(&config, offline, cli.high_contrast)?
                .run()
                .await
        }
    }
}

fn run_render(
    config: &config::Config,
    text: &str,
    format: RenderFormat,
    high_contrast: bool,
) -> Result<()> {
    let nodes = config.renderer().render(text);
    materialize(&nodes, TraceSurface::new(0));

    let mut out = io::stdout().lock();
    match format {
        RenderFormat::Terminal => {
            let theme = Theme::for_contrast(high_contrast);
            let rendered = render_lines(&nodes, &theme);
            let hyperlinks = out.is_terminal();
            write_lines(&mut out, &rendered, None, hyperlinks)?;
        }
        RenderFormat::Plain => {
            writeln!(out, "{}", materialize(&nodes, PlainSurface::new()))?;
        }
        RenderFormat::Html => {
            writeln!(out, "{}", materialize(&nodes, HtmlSurface::new()))?;
        }
        RenderFormat::Json => {
            let json = serde_json::to_string_pretty(&nodes).context("serializing nodes")?;
            writeln!(out, "{json}")?;
        }
    }
    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("reading message from stdin")?;
    // A trailing newline from `echo` is not part of the message
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .init();
}
