use std::collections::HashSet;
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::VideoItem,
};

const SEARCH_URL: &str = "https://www.googleapis.com/youtube/v3/search";
const VIDEOS_URL: &str = "https://www.googleapis.com/youtube/v3/videos";

const MIN_VIEWS: u64 = 10_000;
const MIN_DURATION_SECONDS: u64 = 300;
const SEARCH_POOL_SIZE: u32 = 25;

/// Channels whose results are boosted ahead of everything else.
const PREFERRED_CHANNELS: &[&str] = &[
    "khan academy",
    "3blue1brown",
    "crashcourse",
    "cs50",
    "veritasium",
    "freecodecamp.org",
    "the coding train",
    "mycodeschool",
    "geeksforgeeks",
    "corey schafer",
    "academind",
    "simplilearn",
    "edureka",
    "telusko",
    "codebasics",
    "tech with tim",
    "sentdex",
    "statquest with josh starmer",
    "two minute papers",
    "numberphile",
    "mathologer",
    "minutephysics",
    "real engineering",
    "learn engineering",
    "microsoft developer",
];

static ISO_DURATION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?$").expect("iso-duration pattern is valid")
});

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideosResponse {
    #[serde(default)]
    items: Vec<VideoDetails>,
}

#[derive(Debug, Deserialize)]
struct VideoDetails {
    id: String,
    snippet: Snippet,
    #[serde(default)]
    statistics: Option<Statistics>,
    #[serde(rename = "contentDetails", default)]
    content_details: Option<ContentDetails>,
}

#[derive(Debug, Deserialize)]
struct Snippet {
    title: String,
    #[serde(default)]
    description: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
    #[serde(default)]
    thumbnails: Thumbnails,
    #[serde(rename = "publishedAt", default)]
    published_at: String,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    #[serde(default)]
    high: Option<Thumbnail>,
    #[serde(default)]
    default: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

#[derive(Debug, Deserialize)]
struct Statistics {
    #[serde(rename = "viewCount", default)]
    view_count: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ContentDetails {
    #[serde(default)]
    duration: Option<String>,
}

/// YouTube Data API client with quality filtering: low-view, too-short,
/// off-topic and duplicate results are dropped before anything reaches a
/// lesson.
pub struct VideoService {
    client: reqwest::Client,
    api_key: SecretString,
}

impl VideoService {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::InternalError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key: config.youtube_api_key.clone(),
        })
    }

    /// Searches for videos matching the query and returns up to
    /// `max_results` filtered, ranked items.
    pub async fn fetch_videos(&self, query: &str, max_results: usize) -> AppResult<Vec<VideoItem>> {
        let enhanced = enhance_query(query);
        let pool_size = SEARCH_POOL_SIZE.to_string();

        let search: SearchResponse = self
            .client
            .get(SEARCH_URL)
            .query(&[
                ("part", "snippet"),
                ("q", enhanced.as_str()),
                ("type", "video"),
                ("videoEmbeddable", "true"),
                ("safeSearch", "strict"),
                ("maxResults", pool_size.as_str()),
                ("order", "relevance"),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| AppError::VideoSearchError(format!("Search request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::VideoSearchError(format!("Search returned an error: {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::VideoSearchError(format!("Invalid search response: {}", e)))?;

        let video_ids: Vec<String> = search
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        if video_ids.is_empty() {
            log::warn!("No video results found for query '{}'", query);
            return Ok(Vec::new());
        }

        let joined_ids = video_ids.join(",");
        let details: VideosResponse = self
            .client
            .get(VIDEOS_URL)
            .query(&[
                ("part", "snippet,contentDetails,statistics"),
                ("id", joined_ids.as_str()),
                ("key", self.api_key.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| AppError::VideoSearchError(format!("Details request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::VideoSearchError(format!("Details returned an error: {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::VideoSearchError(format!("Invalid details response: {}", e)))?;

        Ok(filter_and_rank(details.items, query, max_results))
    }
}

fn filter_and_rank(videos: Vec<VideoDetails>, query: &str, max_results: usize) -> Vec<VideoItem> {
    let mut seen_titles: HashSet<String> = HashSet::new();
    let mut filtered: Vec<VideoItem> = Vec::new();

    for video in videos {
        let title = video.snippet.title;
        let description = video.snippet.description;
        let channel = video.snippet.channel_title;

        let views = video
            .statistics
            .as_ref()
            .and_then(|s| s.view_count.as_deref())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0u64);
        let duration = video
            .content_details
            .as_ref()
            .and_then(|c| c.duration.as_deref())
            .map(parse_iso_duration)
            .unwrap_or(0);

        if !seen_titles.insert(normalize_title(&title)) {
            log::debug!("Duplicate title skipped: {}", title);
            continue;
        }
        if views < MIN_VIEWS {
            log::debug!("Skipped '{}' - low views: {}", title, views);
            continue;
        }
        if duration < MIN_DURATION_SECONDS {
            log::debug!("Skipped '{}' - too short: {}s", title, duration);
            continue;
        }
        if !is_relevant(&title, &description, query) {
            log::debug!("Skipped '{}' - not relevant to topic", title);
            continue;
        }

        let thumbnail = video
            .snippet
            .thumbnails
            .high
            .or(video.snippet.thumbnails.default)
            .map(|t| t.url)
            .unwrap_or_default();

        let channel_lower = channel.to_lowercase();
        let priority_boost = PREFERRED_CHANNELS
            .iter()
            .any(|preferred| channel_lower.contains(preferred));

        filtered.push(VideoItem {
            video_id: video.id,
            title,
            description,
            thumbnail,
            channel,
            views,
            duration_seconds: duration,
            published_at: video.snippet.published_at,
            priority_boost,
        });
    }

    filtered.sort_by(|a, b| {
        b.priority_boost
            .cmp(&a.priority_boost)
            .then(b.views.cmp(&a.views))
    });
    filtered.truncate(max_results);
    filtered
}

/// Steers search toward educational long-form content and away from shorts,
/// music and reaction videos.
fn enhance_query(query: &str) -> String {
    format!(
        "{} tutorial OR course OR lecture OR explained OR example OR walkthrough \
         -shorts -song -music -trailer -review -reaction -prank",
        query
    )
}

/// At least half of the query words must appear in the title or description.
fn is_relevant(title: &str, description: &str, query: &str) -> bool {
    let keywords: Vec<String> = query.to_lowercase().split_whitespace().map(String::from).collect();
    if keywords.is_empty() {
        return true;
    }

    let content = format!("{} {}", title, description).to_lowercase();
    let matches = keywords.iter().filter(|kw| content.contains(kw.as_str())).count();

    matches >= (keywords.len() / 2).max(1)
}

/// Hash of the lowercased title, used for duplicate suppression across
/// near-identical re-uploads.
fn normalize_title(title: &str) -> String {
    let digest = Sha256::digest(title.trim().to_lowercase().as_bytes());
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}

/// Parses ISO-8601 durations of the `PT#H#M#S` shape YouTube uses;
/// anything else counts as zero seconds.
fn parse_iso_duration(duration: &str) -> u64 {
    let Some(caps) = ISO_DURATION_RE.captures(duration) else {
        return 0;
    };

    let component = |index: usize| {
        caps.get(index)
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    };

    component(1) * 3600 + component(2) * 60 + component(3)
}
