//! Interactive chat session
//!
//! Reads user lines from stdin, asks the backend (falling back to the local
//! responder), and prints each reply framed with a timestamped header.

use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use leozin_core::responder::{self, QUICK_ACTIONS, UNAVAILABLE_MESSAGE, WELCOME_MESSAGE};
use leozin_core::{ChatClient, Config, RenderCache, Sender, TextRenderer, WidgetState};

use crate::tui::printer::{write_framed, write_line};
use crate::tui::{render_lines, Theme};

const PROMPT: &str = "└──> ";

/// What a line typed by the user asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    ShowXp,
    Empty,
    Message(String),
}

/// Classify one line of user input
///
/// A bare number picks the matching quick action.
pub fn classify(line: &str) -> Input {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Input::Empty;
    }

    match trimmed.to_lowercase().as_str() {
        "/sair" | "exit" | "quit" => return Input::Quit,
        "/xp" => return Input::ShowXp,
        _ => {}
    }

    if let Ok(n) = trimmed.parse::<usize>() {
        if let Some(action) = n.checked_sub(1).and_then(|i| QUICK_ACTIONS.get(i)) {
            return Input::Message((*action).to_string());
        }
    }

    Input::Message(trimmed.to_string())
}

pub struct ChatSession {
    state: WidgetState,
    renderer: TextRenderer,
    cache: RenderCache,
    client: Option<ChatClient>,
    theme: Theme,
    hyperlinks: bool,
    backend_down_notified: bool,
}

impl ChatSession {
    pub fn new(config: &Config, offline: bool, high_contrast: bool) -> Result<Self> {
        let client = if offline {
            None
        } else {
            Some(ChatClient::new(&config.backend).context("configuring chat backend")?)
        };

        let mut state = WidgetState::new();
        state.open();
        if high_contrast {
            state.toggle_high_contrast();
        }

        let theme = Theme::for_contrast(state.preferences().high_contrast);
        debug!(theme = theme.name, offline, "chat session configured");

        Ok(Self {
            theme,
            state,
            renderer: config.renderer(),
            cache: RenderCache::new(),
            client,
            hyperlinks: io::stdout().is_terminal(),
            backend_down_notified: false,
        })
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Record the user's message and produce the assistant reply
    pub async fn reply_to(&mut self, message: &str) -> String {
        self.state.push_message(Sender::User, message);

        let remote = match &self.client {
            Some(client) => client.ask(message).await,
            None => None,
        };

        let reply = match remote {
            Some(reply) => reply,
            None => {
                if self.client.is_some() && !self.backend_down_notified {
                    self.backend_down_notified = true;
                    self.print_notice(UNAVAILABLE_MESSAGE);
                }
                responder::reply(message).to_string()
            }
        };

        self.state.push_message(Sender::Bot, reply.as_str());
        reply
    }

    /// Run the read-reply loop until the user quits or stdin closes
    pub async fn run(mut self) -> Result<()> {
        if let Some(client) = &self.client {
            debug!(endpoint = %client.endpoint(), "chat session started");
        }

        self.state.push_message(Sender::Bot, WELCOME_MESSAGE);
        self.print_bot(WELCOME_MESSAGE)?;
        self.print_quick_actions()?;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            self.print_user_prompt()?;

            let line = tokio::select! {
                line = lines.next_line() => line.context("reading stdin")?,
                _ = tokio::signal::ctrl_c() => None,
            };
            let Some(line) = line else {
                break;
            };

            match classify(&line) {
                Input::Quit => break,
                Input::Empty => continue,
                Input::ShowXp => {
                    let xp = self.state.xp_label();
                    self.print_notice(&xp);
                }
                Input::Message(message) => {
                    let reply = self.reply_to(&message).await;
                    self.print_bot(&reply)?;
                }
            }
        }

        let farewell = format!("Encerrando sessão. Até logo! ({})", self.state().xp_label());
        self.print_notice(&farewell);
        Ok(())
    }

    fn header(&self, who: &str, style: Style) -> Line<'static> {
        let now = chrono::Local::now().format("%H:%M:%S");
        Line::from(vec![
            Span::styled(format!("[{}] ", now), Style::default().fg(self.theme.dim_color)),
            Span::styled(who.to_string(), style.add_modifier(Modifier::BOLD)),
        ])
    }

    fn print_bot(&mut self, content: &str) -> Result<()> {
        let nodes = self.cache.get_or_render(&self.renderer, content);
        let rendered = render_lines(&nodes, &self.theme);
        let header = self.header(
            "Leozin responde:",
            Style::default().fg(self.theme.assistant_msg_color),
        );

        let mut out = io::stdout().lock();
        write_framed(&mut out, &header, &rendered, &self.theme, self.hyperlinks)?;
        Ok(())
    }

    fn print_user_prompt(&self) -> Result<()> {
        let header = self.header("Você diz:", Style::default().fg(self.theme.user_msg_color));
        let mut out = io::stdout().lock();
        writeln!(out)?;
        write_line(&mut out, &header)?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
        Ok(())
    }

    fn print_quick_actions(&self) -> Result<()> {
        let mut spans = vec![Span::styled(
            "Sugestões: ",
            Style::default().fg(self.theme.dim_color),
        )];
        for (idx, action) in QUICK_ACTIONS.iter().enumerate() {
            spans.push(Span::styled(
                format!("[{}] {}  ", idx + 1, action),
                Style::default().fg(self.theme.accent_color),
            ));
        }

        let mut out = io::stdout().lock();
        write_line(&mut out, &Line::from(spans))?;
        Ok(())
    }

    fn print_notice(&self, text: &str) {
        let line = Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(self.theme.system_msg_color),
        ));
        let mut out = io::stdout().lock();
        if let Err(e) = write_line(&mut out, &line) {
            warn!("failed to write notice: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify("/sair"), Input::Quit);
        assert_eq!(classify("  EXIT "), Input::Quit);
        assert_eq!(classify("quit"), Input::Quit);
        assert_eq!(classify("/xp"), Input::ShowXp);
        assert_eq!(classify("   "), Input::Empty);
        assert_eq!(classify(" oi "), Input::Message("oi".to_string()));
    }

    #[test]
    fn test_classify_quick_actions() {
        assert_eq!(classify("1"), Input::Message("Como começar?".to_string()));
        assert_eq!(classify("4"), Input::Message("Estudo".to_string()));
        assert_eq!(classify("0"), Input::Message("0".to_string()));
        assert_eq!(classify("9"), Input::Message("9".to_string()));
    }

    #[tokio::test]
    async fn test_offline_reply_updates_state() {
        let mut session = ChatSession::new(&Config::default(), true, false).unwrap();
        let reply = session.reply_to("Como começar?").await;

        assert!(reply.starts_with("Para começar na programação"));
        assert_eq!(session.state().xp(), 160);
        assert_eq!(session.state().history().len(), 2);
        assert_eq!(session.state().history()[0].sender, Sender::User);
    }

    #[test]
    fn test_high_contrast_theme() {
        let session = ChatSession::new(&Config::default(), true, true).unwrap();
        assert!(session.state().preferences().high_contrast);
        assert_eq!(session.theme.name, "high-contrast");
    }
}
