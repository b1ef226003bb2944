use serde::{Deserialize, Serialize};

/// A lesson video surfaced by the video-search service, post-filtering.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct VideoItem {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub channel: String,
    pub views: u64,
    pub duration_seconds: u64,
    pub published_at: String,
    pub priority_boost: bool,
}

impl VideoItem {
    /// Truncated single-line description for API responses.
    pub fn short_description(&self) -> String {
        let flattened = self.description.replace('\n', " ");
        let trimmed = flattened.trim();
        trimmed.chars().take(300).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_with_description(description: &str) -> VideoItem {
        VideoItem {
            video_id: "abc123".to_string(),
            title: "Intro to Rust".to_string(),
            description: description.to_string(),
            thumbnail: "https://example.com/thumb.jpg".to_string(),
            channel: "freecodecamp.org".to_string(),
            views: 120_000,
            duration_seconds: 1800,
            published_at: "2024-01-01T00:00:00Z".to_string(),
            priority_boost: true,
        }
    }

    #[test]
    fn short_description_flattens_newlines() {
        let video = video_with_description("line one\nline two");
        assert_eq!(video.short_description(), "line one line two");
    }

    #[test]
    fn short_description_truncates_to_300_chars() {
        let video = video_with_description(&"x".repeat(500));
        assert_eq!(video.short_description().len(), 300);
    }
}
