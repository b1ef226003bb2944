pub mod course_repository;

pub use course_repository::{CourseRepository, MongoCourseRepository};

#[cfg(test)]
pub use course_repository::MockCourseRepository;
