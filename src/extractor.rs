use serde::{Deserialize, Serialize};

/// Characters deleted from the steno segment of every entry.
const MARKER_CHARS: [char; 3] = ['{', '}', '^'];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    pub lines_seen: usize,
    pub blank_lines: usize,
    pub lines_without_pipe: usize,
    pub entries_dropped: usize,
    pub entries_extracted: usize,
}

impl ExtractionStats {
    pub fn lines_skipped(&self) -> usize {
        self.blank_lines + self.lines_without_pipe + self.entries_dropped
    }
}

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub words: Vec<String>,
    pub stats: ExtractionStats,
}

impl Extraction {
    pub fn result(&self) -> String {
        self.words.join("|")
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Extracts the steno side of every `steno|definition` line in `raw_text`
/// and joins the cleaned segments with `|`.
///
/// For each line: trim it, skip it when empty or when it contains no `|`,
/// take the text before the first `|`, delete every `{`, `}` and `^`, trim
/// again, and keep the segment when anything remains. Trimming covers
/// Unicode whitespace plus the byte order mark (U+FEFF). Input order is
/// preserved, duplicates included. Never fails; malformed text just
/// produces a shorter (possibly empty) result.
pub fn extract(raw_text: &str) -> String {
    extract_entries(raw_text).result()
}

/// Same transform as [`extract`], but returns the individual segments plus
/// per-line counters for status reporting.
pub fn extract_entries(raw_text: &str) -> Extraction {
    let mut words = Vec::new();
    let mut stats = ExtractionStats::default();

    for line in raw_text.lines() {
        stats.lines_seen += 1;
        let trimmed = trim_segment(line);

        if trimmed.is_empty() {
            stats.blank_lines += 1;
            continue;
        }

        let Some((steno_part, _)) = trimmed.split_once('|') else {
            stats.lines_without_pipe += 1;
            continue;
        };

        let cleaned = strip_markers(trim_segment(steno_part));
        let cleaned = trim_segment(&cleaned);

        if cleaned.is_empty() {
            stats.entries_dropped += 1;
        } else {
            words.push(cleaned.to_string());
            stats.entries_extracted += 1;
        }
    }

    Extraction { words, stats }
}

fn strip_markers(segment: &str) -> String {
    segment
        .chars()
        .filter(|c| !MARKER_CHARS.contains(c))
        .collect()
}

// char::is_whitespace does not cover U+FEFF, which Windows-saved and
// pasted text can carry at line or segment edges.
fn trim_segment(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
