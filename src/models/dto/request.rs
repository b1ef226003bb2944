use serde::Deserialize;
use validator::Validate;

use crate::parsing::OutlineEntry;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateOutlineRequest {
    #[validate(length(min = 1, max = 2000))]
    pub prompt: String,

    #[validate(length(min = 1, max = 100))]
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BuildCourseRequest {
    #[validate(length(min = 1, max = 2000))]
    pub prompt: String,

    #[validate(length(min = 1, max = 100))]
    pub user_id: String,

    /// When the frontend already holds an outline (e.g. after an edit pass),
    /// it is used as-is and no outline generation happens.
    pub outline: Option<Vec<OutlineEntryDto>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutlineEntryDto {
    pub title: String,
    pub summary: String,
}

impl From<OutlineEntryDto> for OutlineEntry {
    fn from(dto: OutlineEntryDto) -> Self {
        OutlineEntry {
            title: dto.title,
            summary: dto.summary,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct EvaluateAnswerRequest {
    #[validate(length(min = 1))]
    pub question: String,

    /// Capped at 26 so every option gets a distinct A-Z label in the
    /// evaluation prompt.
    #[validate(length(min = 2, max = 26))]
    pub options: Vec<String>,

    #[validate(length(min = 1))]
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0).max(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).clamp(1, 100)
    }
}
