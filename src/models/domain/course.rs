use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::{Mcq, VideoItem};

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Course {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub lessons: Vec<Lesson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Lesson {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub videos: Vec<VideoItem>,
    pub quiz: Vec<Mcq>,
}

impl Course {
    pub fn new(user_id: &str, title: &str, description: &str, lessons: Vec<Lesson>) -> Self {
        Course {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            lessons,
            created_at: Some(Utc::now()),
            modified_at: Some(Utc::now()),
        }
    }
}

impl Lesson {
    pub fn new(
        title: &str,
        summary: &str,
        content: String,
        videos: Vec<VideoItem>,
        quiz: Vec<Mcq>,
    ) -> Self {
        Lesson {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            content,
            videos,
            quiz,
        }
    }
}
