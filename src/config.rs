use std::env;

use secrecy::SecretString;

use crate::parsing::DEFAULT_MIN_OPTIONS;

#[derive(Clone, Debug)]
pub struct Config {
    pub llm_url: String,
    pub llm_model: String,
    pub llm_timeout_seconds: u64,
    pub youtube_api_key: SecretString,
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub courses_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub allowed_origins: Vec<String>,
    pub quiz_min_options: usize,
    pub quiz_questions_per_lesson: usize,
    pub videos_per_lesson: usize,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            llm_url: env::var("LLM_URL")
                .unwrap_or_else(|_| "http://localhost:11434/api/generate".to_string()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "deepseek-r1:1.5b".to_string()),
            llm_timeout_seconds: env::var("LLM_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(120),
            youtube_api_key: SecretString::from(
                env::var("YOUTUBE_API_KEY").unwrap_or_else(|_| "youtube_api_key".to_string()),
            ),
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "skillmint-local".to_string()),
            courses_collection: env::var("COURSES_COLLECTION")
                .unwrap_or_else(|_| "courses".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| {
                    "http://localhost:8080,http://127.0.0.1:8080".to_string()
                })
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            quiz_min_options: env::var("QUIZ_MIN_OPTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(DEFAULT_MIN_OPTIONS),
            quiz_questions_per_lesson: env::var("QUIZ_QUESTIONS_PER_LESSON")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(5),
            videos_per_lesson: env::var("VIDEOS_PER_LESSON")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(3),
        }
    }

    /// Validate that production-critical configuration is set
    /// Panics if required secrets are using default values
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.youtube_api_key.expose_secret() == "youtube_api_key" {
            panic!(
                "FATAL: YOUTUBE_API_KEY is using default value! Set YOUTUBE_API_KEY environment variable."
            );
        }

        if self.llm_url.contains("localhost") {
            log::warn!("LLM_URL points at localhost; set LLM_URL for production deployments");
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            llm_url: "http://localhost:11434/api/generate".to_string(),
            llm_model: "test-model".to_string(),
            llm_timeout_seconds: 5,
            youtube_api_key: SecretString::from("test_api_key".to_string()),
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "skillmint-test".to_string(),
            courses_collection: "courses".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8000,
            allowed_origins: vec!["http://localhost:8080".to_string()],
            quiz_min_options: DEFAULT_MIN_OPTIONS,
            quiz_questions_per_lesson: 5,
            videos_per_lesson: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.llm_url.is_empty());
        assert!(!config.llm_model.is_empty());
        assert!(config.quiz_min_options >= 2);
        assert!(!config.allowed_origins.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.mongo_db_name, "skillmint-test");
        assert_eq!(config.courses_collection, "courses");
        assert_eq!(config.quiz_min_options, DEFAULT_MIN_OPTIONS);
    }
}
