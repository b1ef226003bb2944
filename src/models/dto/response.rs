use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    models::domain::{Course, Lesson, Mcq, VideoItem},
    parsing::OutlineEntry,
};

#[derive(Debug, Clone, Serialize)]
pub struct OutlineResponse {
    pub lessons: Vec<OutlineEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildCourseResponse {
    pub message: String,
    pub course_id: String,
    pub title: String,
}

impl BuildCourseResponse {
    pub fn from_course(course: &Course) -> Self {
        BuildCourseResponse {
            message: "Course successfully generated".to_string(),
            course_id: course.id.clone(),
            title: course.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluateAnswerResponse {
    pub explanation: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VideoDto {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
}

impl From<&VideoItem> for VideoDto {
    fn from(video: &VideoItem) -> Self {
        VideoDto {
            video_id: video.video_id.clone(),
            title: video.title.clone(),
            description: video.short_description(),
            thumbnail: video.thumbnail.clone(),
        }
    }
}

/// API view of a stored course. Differs from the domain model only in its
/// video entries, which carry truncated single-line descriptions.
#[derive(Debug, Clone, Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub lessons: Vec<LessonDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonDto {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub videos: Vec<VideoDto>,
    pub quiz: Vec<Mcq>,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        CourseResponse {
            id: course.id.clone(),
            user_id: course.user_id.clone(),
            title: course.title.clone(),
            description: course.description.clone(),
            lessons: course.lessons.iter().map(LessonDto::from).collect(),
            created_at: course.created_at,
            modified_at: course.modified_at,
        }
    }
}

impl From<&Lesson> for LessonDto {
    fn from(lesson: &Lesson) -> Self {
        LessonDto {
            id: lesson.id.clone(),
            title: lesson.title.clone(),
            summary: lesson.summary.clone(),
            content: lesson.content.clone(),
            videos: lesson.videos.iter().map(VideoDto::from).collect(),
            quiz: lesson.quiz.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseResponse>,
    pub total: i64,
    pub offset: i64,
    pub limit: i64,
}

#[derive(Debug, Serialize)]
pub struct DeleteCourseResponse {
    pub message: String,
}
