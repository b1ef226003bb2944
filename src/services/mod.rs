pub mod course_builder_service;
pub mod course_service;
pub mod llm_service;
pub mod video_service;

pub use course_builder_service::CourseBuilderService;
pub use course_service::CourseService;
pub use llm_service::LlmService;
pub use video_service::VideoService;
