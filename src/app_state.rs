use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::MongoCourseRepository,
    services::{CourseBuilderService, CourseService, LlmService, VideoService},
};

#[derive(Clone)]
pub struct AppState {
    pub llm_service: Arc<LlmService>,
    pub video_service: Arc<VideoService>,
    pub course_service: Arc<CourseService>,
    pub course_builder: Arc<CourseBuilderService>,
    pub db: Database,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let course_repository = Arc::new(MongoCourseRepository::new(&db, &config));
        course_repository.ensure_indexes().await?;
        let course_service = Arc::new(CourseService::new(course_repository));

        let llm_service = Arc::new(LlmService::new(&config)?);
        let video_service = Arc::new(VideoService::new(&config)?);

        let config = Arc::new(config);
        let course_builder = Arc::new(CourseBuilderService::new(
            Arc::clone(&llm_service),
            Arc::clone(&video_service),
            Arc::clone(&course_service),
            Arc::clone(&config),
        ));

        Ok(Self {
            llm_service,
            video_service,
            course_service,
            course_builder,
            db,
            config,
        })
    }
}
