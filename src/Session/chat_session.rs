use super::confirmed::ConfirmedMaterial;
use super::prompt::Role;
use crate::ResponseParser::parser::{ParserError, ResponseParser};
use crate::ResponseParser::possibility::Possibility;
use chrono::{DateTime, Utc};
use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Parser(#[from] ParserError),
    #[error("No possibility selected")]
    NoSelection,
    #[error("Possibility {index} does not exist, there are {len}")]
    PossibilityOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp,
        }
    }
}

/// State of one conversation with the chemistry backend.
///
/// The session is a plain value owned by the caller: the parser never sees it,
/// and every transition is a method taking the inputs (response text, time)
/// explicitly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChemySession {
    pub chat_history: Vec<ChatMessage>,
    pub last_response: Option<ChatMessage>,
    pub error: Option<ChatMessage>,
    pub possibilities: Vec<Possibility>,
    /// index into `possibilities`
    pub selected: Option<usize>,
}

impl ChemySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_user_input(&mut self, input: &str, at: DateTime<Utc>) {
        self.error = None;
        self.chat_history
            .push(ChatMessage::new(Role::User, input.trim(), at));
    }

    /// Parses a backend response into the session.
    ///
    /// On success the possibilities are replaced, the selection is cleared and
    /// the response is appended to the history. When nothing can be parsed a
    /// system message "Error: ..." is appended, `error` is set and the previous
    /// possibilities are kept.
    pub fn apply_response<R: Rng>(
        &mut self,
        raw: &str,
        parser: &mut ResponseParser<R>,
        at: DateTime<Utc>,
    ) -> Result<usize, SessionError> {
        match parser.parse(raw) {
            Ok(possibilities) => {
                let response = ChatMessage::new(Role::Assistant, raw, at);
                let count = possibilities.len();
                self.possibilities = possibilities;
                self.selected = None;
                self.error = None;
                self.last_response = Some(response.clone());
                self.chat_history.push(response);
                info!("session: {} possibilities available", count);
                Ok(count)
            }
            Err(e) => {
                warn!("session: response rejected: {}", e);
                let message = ChatMessage::new(Role::System, format!("Error: {}", e), at);
                self.error = Some(message.clone());
                self.chat_history.push(message);
                Err(e.into())
            }
        }
    }

    pub fn select(&mut self, index: usize) -> Result<&Possibility, SessionError> {
        let len = self.possibilities.len();
        if index >= len {
            return Err(SessionError::PossibilityOutOfRange { index, len });
        }
        self.selected = Some(index);
        Ok(&self.possibilities[index])
    }

    pub fn selected_possibility(&self) -> Option<&Possibility> {
        self.selected.and_then(|i| self.possibilities.get(i))
    }

    pub fn confirm_selected(&self, at: DateTime<Utc>) -> Result<ConfirmedMaterial, SessionError> {
        let possibility = self.selected_possibility().ok_or(SessionError::NoSelection)?;
        info!("session: confirming '{}'", possibility.name);
        Ok(ConfirmedMaterial::from_possibility(possibility, at))
    }

    pub fn clear_history(&mut self) {
        *self = Self::default();
    }
}
