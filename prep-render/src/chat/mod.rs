//! Chat session state
//!
//! Everything the study bot remembers lives in one [`ChatSession`] value: the transcript, the
//! session counters and the display settings. Callers own it and pass `now` in explicitly;
//! nothing here reads the clock or talks to a model endpoint.

pub mod topics;

use crate::formats::inline::format_inline;
use crate::pipeline::Pipeline;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const WELCOME_MESSAGE: &str =
    "Hello! I'm your DSA Study Bot. Ask me anything about Data Structures and Algorithms!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    fn class(self) -> &'static str {
        match self {
            Sender::User => "prep-chat-user",
            Sender::Bot => "prep-chat-bot",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChatSettings {
    pub theme: String,
    pub sound_enabled: bool,
    pub show_timestamps: bool,
    /// Format replies with the full transformer instead of the inline formatter.
    pub render_markdown: bool,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            sound_enabled: true,
            show_timestamps: false,
            render_markdown: false,
        }
    }
}

/// Counters shown in the chat header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub questions_asked: u32,
    /// Whole seconds since the session started.
    pub session_duration: i64,
    pub favorite_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChatError {
    Serialize(String),
    Deserialize(String),
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatError::Serialize(msg) => write!(f, "Failed to save chat session: {msg}"),
            ChatError::Deserialize(msg) => write!(f, "Failed to load chat session: {msg}"),
        }
    }
}

impl std::error::Error for ChatError {}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    #[serde(rename = "sessionStartTime")]
    pub started_at: DateTime<Utc>,
    pub total_questions: u32,
    pub favorite_topics: Vec<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(rename = "chatSettings", default)]
    pub settings: ChatSettings,
    #[serde(default)]
    next_id: u64,
}

impl ChatSession {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            messages: vec![welcome(now)],
            started_at: now,
            total_questions: 0,
            favorite_topics: Vec::new(),
            user_name: None,
            settings: ChatSettings::default(),
            next_id: 2,
        }
    }

    /// Record a question from the user.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the question is counted and any
    /// topics it mentions are added to the favourites, each once, in first-seen order.
    pub fn push_user_message(&mut self, text: &str, now: DateTime<Utc>) -> Option<&ChatMessage> {
        if text.trim().is_empty() {
            return None;
        }
        self.total_questions += 1;
        for topic in topics::detect_topics(text) {
            if !self.favorite_topics.iter().any(|t| t == topic) {
                tracing::debug!(topic, "new favourite topic");
                self.favorite_topics.push(topic.to_string());
            }
        }
        Some(self.push(Sender::User, text, now))
    }

    pub fn push_bot_message(&mut self, text: &str, now: DateTime<Utc>) -> &ChatMessage {
        self.push(Sender::Bot, text, now)
    }

    fn push(&mut self, sender: Sender, text: &str, now: DateTime<Utc>) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text: text.to_string(),
            sender,
            timestamp: now,
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Back to just the welcome message, with the counters zeroed.
    pub fn clear(&mut self, now: DateTime<Utc>) {
        tracing::debug!(dropped = self.messages.len(), "clearing chat history");
        self.messages = vec![welcome(now)];
        self.total_questions = 0;
        self.favorite_topics.clear();
        self.next_id = 2;
    }

    pub fn stats(&self, now: DateTime<Utc>) -> SessionStats {
        SessionStats {
            questions_asked: self.total_questions,
            session_duration: (now - self.started_at).num_seconds().max(0),
            favorite_topics: self.favorite_topics.clone(),
        }
    }

    /// Markup for one message body, following `settings.render_markdown`.
    pub fn format_message(&self, text: &str, pipeline: &Pipeline) -> String {
        if self.settings.render_markdown {
            pipeline.run(text)
        } else {
            format_inline(text)
        }
    }

    /// The whole transcript, one `<div>` per message.
    pub fn render_transcript(&self, pipeline: &Pipeline) -> String {
        self.messages
            .iter()
            .map(|message| {
                let time = if self.settings.show_timestamps {
                    format!(
                        "<span class=\"prep-chat-time\">{}</span>",
                        message.timestamp.format("%H:%M")
                    )
                } else {
                    String::new()
                };
                format!(
                    "<div class=\"prep-chat-message {}\">{time}{}</div>",
                    message.sender.class(),
                    self.format_message(&message.text, pipeline)
                )
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String, ChatError> {
        serde_json::to_string_pretty(self).map_err(|e| ChatError::Serialize(e.to_string()))
    }

    /// Load a saved session. Transcripts saved without an id counter continue after their
    /// highest message id.
    pub fn from_json(json: &str) -> Result<Self, ChatError> {
        let mut session: Self =
            serde_json::from_str(json).map_err(|e| ChatError::Deserialize(e.to_string()))?;
        let last_id = session.messages.iter().map(|m| m.id).max().unwrap_or(0);
        session.next_id = session.next_id.max(last_id + 1);
        Ok(session)
    }
}

fn welcome(now: DateTime<Utc>) -> ChatMessage {
    ChatMessage {
        id: 1,
        text: WELCOME_MESSAGE.to_string(),
        sender: Sender::Bot,
        timestamp: now,
    }
}
