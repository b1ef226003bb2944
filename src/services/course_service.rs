use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::domain::Course,
    repositories::CourseRepository,
};

/// Thin persistence pass-through in front of the course repository.
pub struct CourseService {
    repository: Arc<dyn CourseRepository>,
}

impl CourseService {
    pub fn new(repository: Arc<dyn CourseRepository>) -> Self {
        Self { repository }
    }

    pub async fn get_course(&self, id: &str) -> AppResult<Course> {
        let course = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", id)))?;

        Ok(course)
    }

    pub async fn list_courses_by_user(
        &self,
        user_id: &str,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Course>, i64)> {
        self.repository.list_by_user(user_id, offset, limit).await
    }

    pub async fn save_course(&self, course: Course) -> AppResult<Course> {
        log::info!("Saving course '{}' ({})", course.title, course.id);
        self.repository.insert(course).await
    }

    pub async fn delete_course(&self, id: &str) -> AppResult<()> {
        let deleted = self.repository.delete(id).await?;
        if !deleted {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                id
            )));
        }
        Ok(())
    }
}
