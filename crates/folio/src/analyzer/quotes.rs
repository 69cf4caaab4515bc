// ABOUTME: Pull-quote candidate extraction, scoring and spaced selection.
// ABOUTME: Editorial signals live in a (pattern, weight) table evaluated independently.

use once_cell::sync::Lazy;
use regex::Regex;

use super::PullQuote;

pub const MIN_QUOTE_WORDS: usize = 8;
pub const MAX_QUOTE_WORDS: usize = 35;

/// Paragraphs before this index are never quoted, so the lede stays intact.
const PROTECTED_LEDE: usize = 2;

/// Paragraphs shorter than this contribute no candidates.
const MIN_PARAGRAPH_CHARS: usize = 50;

/// Phrases that tend to mark a quotable sentence, with their bonus.
pub const EDITORIAL_SIGNALS: &[(&str, f64)] = &[
    (r"\bthe most\b", 1.5),
    (r"\bwhat (this|it) (means|implies|suggests)\b", 1.5),
    (r"\bthe (real|true|key|fundamental)\b", 1.5),
    (r"\b(striking|remarkable|surprising|fascinating)\b", 1.5),
    (r"\b(ultimately|fundamentally|essentially)\b", 1.5),
    (r"\bit('s|’s| is) (not|clear|important|worth)\b", 1.5),
    (r"\bthe question is\b", 1.5),
    (r"\bif you (think|believe|consider)\b", 1.5),
    (r"\bthis is (why|how|what)\b", 1.5),
    (r"\bthe (problem|answer|solution|truth) is\b", 1.5),
];

static SIGNAL_RULES: Lazy<Vec<(Regex, f64)>> = Lazy::new(|| {
    EDITORIAL_SIGNALS
        .iter()
        .map(|(pattern, weight)| (Regex::new(&format!("(?i){}", pattern)).unwrap(), *weight))
        .collect()
});

// Terminal punctuation, whitespace, then a capital letter.
static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+[A-Z]").unwrap());
static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

const WEAK_OPENERS: &[&str] = &["but ", "and ", "so ", "however,", "also "];
const QUOTE_MARKS: &[char] = &['"', '\u{201C}', '\u{201D}'];

/// Split text into sentences on `.`, `!` or `?` followed by whitespace and a capital.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_BOUNDARY.find_iter(text) {
        // The punctuation is one byte; keep it with the preceding sentence.
        let end = m.start() + 1;
        sentences.push(&text[start..end]);
        let capital = m.end() - 1;
        start = capital;
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sum of the weights of every editorial signal present in the sentence.
pub fn signal_score(sentence: &str) -> f64 {
    SIGNAL_RULES
        .iter()
        .filter(|(re, _)| re.is_match(sentence))
        .map(|(_, weight)| weight)
        .sum()
}

fn length_score(word_count: usize) -> f64 {
    if (12..=25).contains(&word_count) {
        2.0
    } else if (10..=30).contains(&word_count) {
        1.0
    } else {
        0.0
    }
}

/// Score a sentence's suitability as a pull quote.
///
/// Sentences outside the word window score exactly zero.
pub fn score_sentence(sentence: &str) -> f64 {
    let word_count = sentence.split_whitespace().count();
    if !(MIN_QUOTE_WORDS..=MAX_QUOTE_WORDS).contains(&word_count) {
        return 0.0;
    }

    let mut score = length_score(word_count);
    score += signal_score(sentence);

    if sentence.ends_with('?') {
        score += 1.0;
    }

    if sentence.contains(QUOTE_MARKS) {
        score += 0.5;
    }

    let lower = sentence.to_lowercase();
    if WEAK_OPENERS.iter().any(|w| lower.starts_with(w)) {
        score -= 0.5;
    }

    if NUMBER_RE.find_iter(sentence).count() > 2 {
        score -= 1.0;
    }

    if lower.contains("http") || sentence.contains('@') {
        score -= 2.0;
    }

    score
}

/// Build the candidate pool from paragraph texts, indexed by paragraph.
pub fn candidates(paragraphs: &[String]) -> Vec<PullQuote> {
    let mut pool = Vec::new();
    for (paragraph_index, text) in paragraphs.iter().enumerate().skip(PROTECTED_LEDE) {
        if text.chars().count() < MIN_PARAGRAPH_CHARS {
            continue;
        }
        for sentence in split_sentences(text) {
            let score = score_sentence(&sentence);
            if score > 0.0 {
                pool.push(PullQuote {
                    text: sentence,
                    score,
                    paragraph_index,
                });
            }
        }
    }
    pool
}

/// Pick up to `count` candidates by score, keeping them `min_spacing` paragraphs apart.
///
/// The result is in reading order.
pub fn select(mut pool: Vec<PullQuote>, count: usize, min_spacing: usize) -> Vec<PullQuote> {
    if count == 0 {
        return Vec::new();
    }

    // Stable, so equal scores keep document order.
    pool.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut selected: Vec<PullQuote> = Vec::new();
    for candidate in pool {
        if selected.len() >= count {
            break;
        }
        let too_close = selected
            .iter()
            .any(|s| s.paragraph_index.abs_diff(candidate.paragraph_index) < min_spacing);
        if too_close {
            continue;
        }
        selected.push(candidate);
    }

    selected.sort_by_key(|q| q.paragraph_index);
    selected
}
