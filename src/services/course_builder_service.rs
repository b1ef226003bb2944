use std::sync::Arc;

use futures::future::try_join_all;

use crate::{
    config::Config,
    constants::prompts,
    errors::{AppError, AppResult},
    models::{
        domain::{Course, Lesson, VideoItem},
        dto::request::BuildCourseRequest,
    },
    parsing::{self, OutlineEntry},
    services::{CourseService, LlmService, VideoService},
};

/// Video descriptions containing any of these are promotional noise, not
/// lesson material.
const SPAM_KEYWORDS: &[&str] = &[
    "whatsapp",
    "appointment",
    "call now",
    "join our app",
    "classplus",
    "live meeting",
    "course link",
    "telegram",
    "follow me",
    "personal session",
];

/// Lead-in phrases users type that do not belong in a course title.
const PROMPT_LEAD_INS: &[&str] = &[
    "I want to learn about",
    "Tell me about",
    "Teach me",
    "What is",
];

/// Orchestrates a full course build: outline, then per-lesson content,
/// videos and quiz, then persistence. All LLM output flows through the
/// recovery parsers; this service never sees raw model text downstream of
/// them.
pub struct CourseBuilderService {
    llm_service: Arc<LlmService>,
    video_service: Arc<VideoService>,
    course_service: Arc<CourseService>,
    config: Arc<Config>,
}

impl CourseBuilderService {
    pub fn new(
        llm_service: Arc<LlmService>,
        video_service: Arc<VideoService>,
        course_service: Arc<CourseService>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            llm_service,
            video_service,
            course_service,
            config,
        }
    }

    /// Generates an outline for a topic prompt. An outline that recovers to
    /// zero entries is a hard failure: there is nothing to build from and
    /// the request must be rejected.
    pub async fn generate_outline(&self, topic: &str) -> AppResult<Vec<OutlineEntry>> {
        let raw = self
            .llm_service
            .generate(&prompts::outline_prompt(topic))
            .await?;

        let normalized = parsing::strip_reasoning(&raw);
        let entries = parsing::parse_outline(&normalized);

        if entries.is_empty() {
            log::warn!("No lessons parsed from outline for topic '{}'", topic);
            return Err(AppError::ValidationError(
                "Could not parse course outline.".to_string(),
            ));
        }

        log::info!("Parsed {} outline entries for topic '{}'", entries.len(), topic);
        Ok(entries)
    }

    /// Builds and persists a complete course. Lessons are generated
    /// concurrently but assembled in outline order.
    pub async fn build_course(&self, request: BuildCourseRequest) -> AppResult<Course> {
        log::info!("Building course for prompt: {}", request.prompt);

        let outline: Vec<OutlineEntry> = match request.outline {
            Some(entries) if !entries.is_empty() => {
                log::info!("Using outline provided by the client");
                entries.into_iter().map(OutlineEntry::from).collect()
            }
            _ => self.generate_outline(&request.prompt).await?,
        };

        let lessons = try_join_all(outline.iter().map(|entry| self.build_lesson(entry))).await?;

        let topic = clean_topic(&request.prompt);
        let course = Course::new(
            &request.user_id,
            &format!("Course on {}", topic),
            &format!("An AI-generated course on {}", topic),
            lessons,
        );

        self.course_service.save_course(course).await
    }

    async fn build_lesson(&self, entry: &OutlineEntry) -> AppResult<Lesson> {
        log::info!("Generating lesson: {}", entry.title);

        let raw_content = self
            .llm_service
            .generate(&prompts::lesson_prompt(&entry.title, &entry.summary))
            .await?;
        let content = parsing::strip_reasoning(&raw_content).trim().to_string();

        // Video search failure degrades to an empty list; a lesson without
        // videos is still a lesson.
        let videos = match self
            .video_service
            .fetch_videos(&entry.title, self.config.videos_per_lesson)
            .await
        {
            Ok(videos) => filter_videos(videos),
            Err(err) => {
                log::warn!("Video search failed for '{}': {}", entry.title, err);
                Vec::new()
            }
        };

        let raw_quiz = self
            .llm_service
            .generate(&prompts::quiz_prompt(
                self.config.quiz_questions_per_lesson,
                &content,
            ))
            .await?;

        let mut quiz = parsing::recover_mcqs(&raw_quiz, self.config.quiz_min_options);
        if quiz.is_empty() {
            log::warn!(
                "No valid MCQs recovered for lesson '{}', substituting placeholder",
                entry.title
            );
            quiz = parsing::placeholder_quiz();
        }

        Ok(Lesson::new(&entry.title, &entry.summary, content, videos, quiz))
    }
}

/// Drops videos with spammy descriptions or unusable thumbnails.
pub fn filter_videos(videos: Vec<VideoItem>) -> Vec<VideoItem> {
    videos
        .into_iter()
        .filter(|video| {
            if !video.thumbnail.contains("http") {
                log::debug!("Filtered out '{}': missing or invalid thumbnail", video.title);
                return false;
            }
            if is_spammy(&video.description) {
                log::debug!("Filtered out '{}': spammy description", video.title);
                return false;
            }
            true
        })
        .collect()
}

fn is_spammy(description: &str) -> bool {
    let lowered = description.to_lowercase();
    SPAM_KEYWORDS.iter().any(|keyword| lowered.contains(keyword))
}

/// Strips conversational lead-ins from the prompt and capitalises the
/// remainder for use in the course title.
pub fn clean_topic(prompt: &str) -> String {
    let mut topic = prompt.to_string();
    for lead_in in PROMPT_LEAD_INS {
        topic = topic.replace(lead_in, "");
    }
    let topic = topic.trim();

    let mut chars = topic.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(description: &str, thumbnail: &str) -> VideoItem {
        VideoItem {
            video_id: "v".to_string(),
            title: "Some video".to_string(),
            description: description.to_string(),
            thumbnail: thumbnail.to_string(),
            channel: "c".to_string(),
            views: 50_000,
            duration_seconds: 600,
            published_at: String::new(),
            priority_boost: false,
        }
    }

    #[test]
    fn clean_topic_strips_lead_ins_and_capitalises() {
        assert_eq!(clean_topic("I want to learn about rust ownership"), "Rust ownership");
        assert_eq!(clean_topic("Teach me sql joins"), "Sql joins");
        assert_eq!(clean_topic("quantum computing"), "Quantum computing");
        assert_eq!(clean_topic(""), "");
    }

    #[test]
    fn spammy_descriptions_are_filtered() {
        let videos = vec![
            video("great python tutorial", "https://example.com/a.jpg"),
            video("join our app on telegram now!", "https://example.com/b.jpg"),
        ];

        let kept = filter_videos(videos);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].description, "great python tutorial");
    }

    #[test]
    fn videos_without_thumbnails_are_filtered() {
        let videos = vec![
            video("fine", ""),
            video("fine too", "https://example.com/ok.jpg"),
        ];

        let kept = filter_videos(videos);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].thumbnail, "https://example.com/ok.jpg");
    }

    #[test]
    fn spam_detection_is_case_insensitive() {
        assert!(is_spammy("Join us on TELEGRAM for updates"));
        assert!(!is_spammy("A thorough walkthrough of borrow checking"));
    }
}
