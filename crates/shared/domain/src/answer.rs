//! Answer domain entity and the denormalized list row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::MAX_ANSWER_LENGTH;
use crate::error::{DomainError, DomainResult};
use crate::question::Question;

/// Answer domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
    pub question_id: Uuid,
}

impl Answer {
    /// Create a new answer with a fresh id and the current timestamp
    pub fn new(content: String, author_id: Uuid, question_id: Uuid) -> DomainResult<Self> {
        validate_content(&content)?;
        Ok(Self {
            id: Uuid::new_v4(),
            content,
            created_at: Utc::now(),
            author_id,
            question_id,
        })
    }

    /// Replace the content, leaving author, question and timestamp untouched
    pub fn revise(&mut self, content: String) -> DomainResult<()> {
        validate_content(&content)?;
        self.content = content;
        Ok(())
    }
}

fn validate_content(content: &str) -> DomainResult<()> {
    if content.trim().is_empty() {
        return Err(DomainError::validation("Answer content cannot be empty"));
    }
    if content.chars().count() > MAX_ANSWER_LENGTH {
        return Err(DomainError::validation(format!(
            "Answer content cannot exceed {} characters",
            MAX_ANSWER_LENGTH
        )));
    }
    Ok(())
}

/// One row of the answers-for-a-question listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AnswerDetails {
    /// Answer identifier
    pub id: Uuid,
    /// Answer text
    pub answer_content: String,
    /// Text of the question the answer belongs to
    pub question_content: String,
}

impl AnswerDetails {
    pub fn new(answer: Answer, question: &Question) -> Self {
        Self {
            id: answer.id,
            answer_content: answer.content,
            question_content: question.content.clone(),
        }
    }
}
