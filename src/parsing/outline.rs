use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One lesson of a course outline. Order is significant: it defines the
/// lesson sequence of the generated course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineEntry {
    pub title: String,
    pub summary: String,
}

/// A single outline line format. Grammars are tried in a fixed priority
/// order at each position; a match yields the entry plus the position just
/// past the consumed lines. New formats slot in without touching the
/// existing ones.
trait OutlineGrammar {
    fn try_match(&self, lines: &[&str], pos: usize) -> Option<(OutlineEntry, usize)>;
}

static BOLD_TITLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.\s+\*\*(.+?)\*\*$").expect("bold-title pattern is valid"));

static LESSON_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^lesson\s*\d+\.\s*(.+)$").expect("lesson-marker pattern is valid")
});

/// `<n>. **Title**` followed by a dash-prefixed summary line.
struct BoldTitleGrammar;

impl OutlineGrammar for BoldTitleGrammar {
    fn try_match(&self, lines: &[&str], pos: usize) -> Option<(OutlineEntry, usize)> {
        let caps = BOLD_TITLE_RE.captures(lines[pos])?;
        let next = lines.get(pos + 1)?;
        if !next.starts_with('-') {
            return None;
        }

        let title = caps.get(1)?.as_str().trim().to_string();
        let summary = next
            .trim_start_matches(|c| c == '-' || c == ' ')
            .to_string();

        Some((OutlineEntry { title, summary }, pos + 2))
    }
}

/// `<n>. <Title>: <summary>` on a single line; the colon is mandatory.
struct InlineNumberedGrammar;

impl OutlineGrammar for InlineNumberedGrammar {
    fn try_match(&self, lines: &[&str], pos: usize) -> Option<(OutlineEntry, usize)> {
        let (number, rest) = lines[pos].split_once('.')?;
        let number = number.trim();
        if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let (title, summary) = rest.split_once(':')?;

        Some((
            OutlineEntry {
                title: title.trim().to_string(),
                summary: summary.trim().to_string(),
            },
            pos + 1,
        ))
    }
}

/// `Lesson <n>. <Title>` with the summary on a following line. The scan
/// skips any further lines starting with "lesson" and consumes everything
/// up to and including the summary line.
struct LessonMarkerGrammar;

impl OutlineGrammar for LessonMarkerGrammar {
    fn try_match(&self, lines: &[&str], pos: usize) -> Option<(OutlineEntry, usize)> {
        let caps = LESSON_MARKER_RE.captures(lines[pos])?;
        let title = caps.get(1)?.as_str().trim().to_string();
        if title.is_empty() {
            return None;
        }

        let mut next = pos + 1;
        while next < lines.len() {
            let line = lines[next];
            if !line.to_lowercase().starts_with("lesson") {
                let summary = line.trim().to_string();
                if summary.is_empty() {
                    return None;
                }
                return Some((OutlineEntry { title, summary }, next + 1));
            }
            next += 1;
        }

        None
    }
}

/// Recovers the ordered lesson list from free-form outline text.
///
/// Models format outlines in at least three ways depending on mood; each
/// grammar is tried at the current line in priority order, and a line
/// matching none of them is skipped. An empty result signals that outline
/// generation failed and the caller must reject the request.
pub fn parse_outline(raw: &str) -> Vec<OutlineEntry> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let grammars: [&dyn OutlineGrammar; 3] = [
        &BoldTitleGrammar,
        &InlineNumberedGrammar,
        &LessonMarkerGrammar,
    ];

    let mut entries = Vec::new();
    let mut pos = 0;

    'scan: while pos < lines.len() {
        for grammar in grammars {
            if let Some((entry, next)) = grammar.try_match(&lines, pos) {
                entries.push(entry);
                pos = next;
                continue 'scan;
            }
        }
        pos += 1;
    }

    entries
}
