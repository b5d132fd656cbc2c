//! Chat widget state
//!
//! Owned by the caller and passed to whatever handles UI events. Nothing
//! here touches a display; front ends read the state and draw it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// XP shown before any message is sent
pub const INITIAL_XP: u32 = 150;

/// XP awarded per message the user sends
pub const XP_PER_MESSAGE: u32 = 10;

/// Visible state of the widget window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetStatus {
    Closed,
    Open,
    Minimized,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
    ExtraLarge,
}

impl FontSize {
    /// Next size in the cycle, wrapping back to `Small`
    pub fn next(self) -> Self {
        match self {
            FontSize::Small => FontSize::Normal,
            FontSize::Normal => FontSize::Large,
            FontSize::Large => FontSize::ExtraLarge,
            FontSize::ExtraLarge => FontSize::Small,
        }
    }
}

impl std::fmt::Display for FontSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSize::Small => write!(f, "small"),
            FontSize::Normal => write!(f, "normal"),
            FontSize::Large => write!(f, "large"),
            FontSize::ExtraLarge => write!(f, "extra-large"),
        }
    }
}

/// User-adjustable display preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub font_size: FontSize,
    pub high_contrast: bool,
    pub tts_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// One entry in the conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct WidgetState {
    is_open: bool,
    is_minimized: bool,
    xp: u32,
    preferences: Preferences,
    history: Vec<ChatMessage>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetState {
    pub fn new() -> Self {
        Self {
            is_open: false,
            is_minimized: false,
            xp: INITIAL_XP,
            preferences: Preferences::default(),
            history: Vec::new(),
        }
    }

    pub fn status(&self) -> WidgetStatus {
        match (self.is_open, self.is_minimized) {
            (false, _) => WidgetStatus::Closed,
            (true, false) => WidgetStatus::Open,
            (true, true) => WidgetStatus::Minimized,
        }
    }

    pub fn open(&mut self) -> WidgetStatus {
        self.is_open = true;
        self.is_minimized = false;
        self.status()
    }

    pub fn close(&mut self) -> WidgetStatus {
        self.is_open = false;
        self.is_minimized = false;
        self.status()
    }

    pub fn toggle(&mut self) -> WidgetStatus {
        if self.is_open {
            self.close()
        } else {
            self.open()
        }
    }

    /// Minimize or restore. Has no effect while closed.
    pub fn toggle_minimized(&mut self) -> WidgetStatus {
        if self.is_open {
            self.is_minimized = !self.is_minimized;
        }
        self.status()
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn xp_label(&self) -> String {
        format!("{} XP", self.xp)
    }

    pub fn cycle_font_size(&mut self) -> FontSize {
        self.preferences.font_size = self.preferences.font_size.next();
        self.preferences.font_size
    }

    pub fn toggle_high_contrast(&mut self) -> bool {
        self.preferences.high_contrast = !self.preferences.high_contrast;
        self.preferences.high_contrast
    }

    pub fn toggle_tts(&mut self) -> bool {
        self.preferences.tts_enabled = !self.preferences.tts_enabled;
        self.preferences.tts_enabled
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn apply_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Record a message. User messages award XP.
    pub fn push_message(&mut self, sender: Sender, content: impl Into<String>) -> &ChatMessage {
        if sender == Sender::User {
            self.xp = self.xp.saturating_add(XP_PER_MESSAGE);
        }
        self.history.push(ChatMessage {
            content: content.into(),
            sender,
            timestamp: Utc::now(),
        });
        &self.history[self.history.len() - 1]
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_toggle() {
        let mut state = WidgetState::new();
        assert_eq!(state.status(), WidgetStatus::Closed);
        assert_eq!(state.toggle(), WidgetStatus::Open);
        assert_eq!(state.toggle(), WidgetStatus::Closed);
        assert_eq!(state.open(), WidgetStatus::Open);
        assert_eq!(state.close(), WidgetStatus::Closed);
    }

    #[test]
    fn test_minimize_only_while_open() {
        let mut state = WidgetState::new();
        assert_eq!(state.toggle_minimized(), WidgetStatus::Closed);

        state.open();
        assert_eq!(state.toggle_minimized(), WidgetStatus::Minimized);
        assert_eq!(state.toggle_minimized(), WidgetStatus::Open);

        state.toggle_minimized();
        // Closing and reopening clears the minimized flag
        state.close();
        assert_eq!(state.open(), WidgetStatus::Open);
    }

    #[test]
    fn test_font_size_cycle() {
        let mut state = WidgetState::new();
        assert_eq!(state.preferences().font_size, FontSize::Normal);
        assert_eq!(state.cycle_font_size(), FontSize::Large);
        assert_eq!(state.cycle_font_size(), FontSize::ExtraLarge);
        assert_eq!(state.cycle_font_size(), FontSize::Small);
        assert_eq!(state.cycle_font_size(), FontSize::Normal);
        assert_eq!(FontSize::ExtraLarge.to_string(), "extra-large");
    }

    #[test]
    fn test_xp_and_history() {
        let mut state = WidgetState::new();
        assert_eq!(state.xp_label(), "150 XP");

        state.push_message(Sender::User, "oi");
        state.push_message(Sender::Bot, "Olá!");
        assert_eq!(state.xp(), 160);
        assert_eq!(state.history().len(), 2);
        assert_eq!(state.history()[1].sender, Sender::Bot);
        assert!(state.history()[0].timestamp <= state.history()[1].timestamp);
    }

    #[test]
    fn test_preferences_roundtrip() {
        let mut state = WidgetState::new();
        state.cycle_font_size();
        assert!(state.toggle_high_contrast());
        assert!(state.toggle_tts());

        let json = serde_json::to_value(state.preferences()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"fontSize": "large", "highContrast": true, "ttsEnabled": true})
        );

        let mut other = WidgetState::new();
        other.apply_preferences(serde_json::from_value(json).unwrap());
        assert_eq!(other.preferences(), state.preferences());
    }
}
