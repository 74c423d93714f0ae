//! Question records and the upload draft they are built from
//!
//! A [`Question`] is what the question service stores: markdown `content` plus metadata, in
//! camelCase JSON. A [`QuestionDraft`] is the upload form's state; it only becomes a
//! `Question` once [`QuestionDraft::validate`] passes.

use crate::pipeline::Pipeline;
use crate::stages::escape;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Topics offered by the upload form.
pub const TOPIC_OPTIONS: [&str; 18] = [
    "Array",
    "Dynamic Programming",
    "SQL",
    "Graph",
    "Tree",
    "Linked List",
    "Stack",
    "Queue",
    "Hash Table",
    "Binary Search",
    "Sorting",
    "Recursion",
    "Backtracking",
    "Greedy",
    "Math",
    "String",
    "Two Pointers",
    "Sliding Window",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuestionType {
    #[serde(rename = "MCQ")]
    Mcq,
    Coding,
    #[serde(rename = "Open-ended")]
    OpenEnded,
    #[serde(rename = "OA")]
    OnlineAssessment,
    #[serde(rename = "Technical Round")]
    TechnicalRound,
    #[serde(rename = "System Design")]
    SystemDesign,
}

impl QuestionType {
    pub const ALL: [QuestionType; 6] = [
        QuestionType::Mcq,
        QuestionType::Coding,
        QuestionType::OpenEnded,
        QuestionType::OnlineAssessment,
        QuestionType::TechnicalRound,
        QuestionType::SystemDesign,
    ];

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Mcq => "MCQ",
            QuestionType::Coding => "Coding",
            QuestionType::OpenEnded => "Open-ended",
            QuestionType::OnlineAssessment => "OA",
            QuestionType::TechnicalRound => "Technical Round",
            QuestionType::SystemDesign => "System Design",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        })
    }
}

/// A stored interview question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    /// Markdown body.
    pub content: String,
    #[serde(default)]
    pub company: String,
    pub question_type: QuestionType,
    pub difficulty_level: Difficulty,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub asked_date: Option<DateTime<Utc>>,
    pub uploaded_at: DateTime<Utc>,
    pub uploaded_by: String,
}

impl Question {
    /// The markdown body as markup.
    pub fn render_content(&self, pipeline: &Pipeline) -> String {
        pipeline.run(&self.content)
    }

    /// Title, metadata line, tags and rendered body as one `<article>`.
    pub fn render_page(&self, pipeline: &Pipeline) -> String {
        let text = |s: &str| escape::apply(s, pipeline.options());

        let mut meta = vec![
            self.question_type.to_string(),
            self.difficulty_level.to_string(),
        ];
        if !self.company.trim().is_empty() {
            meta.insert(0, self.company.trim().to_string());
        }
        if let Some(asked) = self.asked_date {
            meta.push(format!("asked {}", asked.format("%Y-%m-%d")));
        }
        meta.push(format!("by {}", self.uploaded_by));

        let tags: String = self
            .tags
            .iter()
            .chain(&self.topics)
            .map(|tag| format!("<span class=\"prep-tag\">{}</span>", text(tag)))
            .collect();

        format!(
            "<article class=\"prep-question\"><h1 class=\"prep-h1\">{title}</h1>\
             <p class=\"prep-question-meta\">{meta}</p>{tags}{body}</article>",
            title = text(&self.title),
            meta = text(&meta.join(" · ")),
            body = self.render_content(pipeline),
        )
    }
}

/// Messages for every missing required field, in form order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<String>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Please fix the following errors: {}", self.0.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Upload form state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionDraft {
    pub title: String,
    pub content: String,
    pub company: String,
    pub question_type: Option<QuestionType>,
    pub difficulty_level: Option<Difficulty>,
    pub tags: Vec<String>,
    pub topics: Vec<String>,
    pub asked_date: Option<DateTime<Utc>>,
    pub uploaded_by: String,
}

impl QuestionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag, trimmed and lowercased. Returns false for blanks and duplicates.
    pub fn add_tag(&mut self, raw: &str) -> bool {
        let tag = raw.trim().to_lowercase();
        if tag.is_empty() || self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    /// Select `topic` if unselected, otherwise deselect it.
    pub fn toggle_topic(&mut self, topic: &str) {
        if let Some(i) = self.topics.iter().position(|t| t == topic) {
            self.topics.remove(i);
        } else {
            self.topics.push(topic.to_string());
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("Title is required".to_string());
        }
        if self.content.trim().is_empty() {
            errors.push("Content is required".to_string());
        }
        if self.question_type.is_none() {
            errors.push("Question Type is required".to_string());
        }
        if self.difficulty_level.is_none() {
            errors.push("Difficulty Level is required".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }

    /// Build the record to store, stamped with `now`.
    pub fn into_question(self, now: DateTime<Utc>) -> Result<Question, ValidationErrors> {
        self.validate()?;
        let missing = |field: &str| ValidationErrors(vec![format!("{field} is required")]);
        let question_type = self.question_type.ok_or_else(|| missing("Question Type"))?;
        let difficulty_level = self
            .difficulty_level
            .ok_or_else(|| missing("Difficulty Level"))?;

        let uploaded_by = match self.uploaded_by.trim() {
            "" => "anonymous".to_string(),
            name => name.to_string(),
        };

        Ok(Question {
            id: None,
            title: self.title.trim().to_string(),
            content: self.content.trim().to_string(),
            company: self.company.trim().to_string(),
            question_type,
            difficulty_level,
            tags: self.tags,
            topics: self.topics,
            asked_date: self.asked_date,
            uploaded_at: now,
            uploaded_by,
        })
    }
}
