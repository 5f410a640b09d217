//! Keyword extraction: builds a weighted keyword inventory from a raw job description.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single keyword from the JD, weighted by position and frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub keyword: String,
    pub frequency: u32,
    /// title=1.0, requirements=0.8, everything else=0.6
    pub position_weight: f32,
    /// frequency * position_weight
    pub weighted_score: f32,
}

pub const MAX_KEYWORDS: usize = 30;

const TITLE_WEIGHT: f32 = 1.0;
const REQUIREMENT_WEIGHT: f32 = 0.8;
const BODY_WEIGHT: f32 = 0.6;

const REQUIREMENT_MARKERS: &[&str] = &[
    "require",
    "must",
    "qualification",
    "proficien",
    "experience with",
    "knowledge of",
    "preferred",
    "nice to have",
];

/// Multi-word terms counted as a single keyword, in display spelling.
const KNOWN_PHRASES: &[&str] = &[
    "Machine Learning",
    "Deep Learning",
    "Data Science",
    "Computer Vision",
    "Natural Language Processing",
    "React Native",
    "Spring Boot",
    "Ruby on Rails",
    "Google Cloud",
    "REST API",
    "Unit Testing",
    "Project Management",
    "Product Management",
    "System Design",
];

/// Generic English and job-posting filler that never counts as a keyword.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "all", "also", "an", "and", "any", "are", "as",
    "at", "be", "been", "being", "best", "both", "but", "by", "can", "candidate", "candidates",
    "company", "could", "day", "do", "does", "each", "etc", "every", "for", "from", "get", "good",
    "great", "has", "have", "help", "high", "highly", "how", "ideal", "if", "in", "including",
    "into", "is", "it", "its", "join", "just", "like", "looking", "make", "many", "may", "more",
    "most", "must", "new", "nice", "not", "of", "on", "one", "or", "other", "our", "out", "over",
    "own", "part", "per", "plus", "position", "preferred", "provide", "required", "requirements",
    "responsibilities", "responsible", "role", "should", "so", "some", "such", "team", "teams",
    "than", "that", "the", "their", "them", "then", "there", "these", "they", "this", "those",
    "through", "to", "up", "us", "use", "using", "very", "want", "we", "well", "what", "when",
    "where", "which", "while", "who", "will", "with", "within", "work", "working", "would",
    "year", "years", "you", "your", "ability", "able", "experience", "experienced", "strong",
    "knowledge", "skills", "skill", "understanding", "excellent", "opportunity", "qualifications",
    "degree", "related", "field", "equivalent", "minimum", "least", "environment", "based",
    "apply", "benefits", "salary", "location", "remote", "hybrid", "full", "time",
];

/// Splits text into candidate terms. Keeps `+ # . /` inside tokens so
/// `c++`, `c#`, `node.js` and `ci/cd` survive; trims them at the edges.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '/' | '-')))
        .map(|raw| raw.trim_matches(|c: char| matches!(c, '.' | '/' | '-')))
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_candidate(token_lower: &str) -> bool {
    token_lower.chars().count() >= 2
        && token_lower.chars().any(|c| c.is_alphabetic())
        && !STOP_WORDS.contains(&token_lower)
}

fn line_weight(line_index: usize, line_lower: &str) -> f32 {
    if line_index == 0 {
        TITLE_WEIGHT
    } else if REQUIREMENT_MARKERS.iter().any(|m| line_lower.contains(m)) {
        REQUIREMENT_WEIGHT
    } else {
        BODY_WEIGHT
    }
}

/// Extracts a weighted keyword inventory from a job description.
///
/// Keywords are deduplicated case-insensitively (first spelling wins), weighted
/// by the most important line they appear on, and sorted by weighted score.
pub fn extract_keywords(jd_text: &str) -> Vec<KeywordEntry> {
    struct Tally {
        spelling: String,
        frequency: u32,
        weight: f32,
        first_seen: usize,
    }

    let mut tallies: HashMap<String, Tally> = HashMap::new();
    let mut seen = 0usize;

    let lines = jd_text.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut record = |spelling: &str, occurrences: u32, weight: f32| {
        let tally = tallies.entry(spelling.to_lowercase()).or_insert_with(|| {
            seen += 1;
            Tally {
                spelling: spelling.to_string(),
                frequency: 0,
                weight,
                first_seen: seen,
            }
        });
        tally.frequency += occurrences;
        tally.weight = tally.weight.max(weight);
    };

    for (line_index, line) in lines.enumerate() {
        let line_lower = line.to_lowercase();
        let weight = line_weight(line_index, &line_lower);
        for phrase in KNOWN_PHRASES {
            let occurrences = line_lower.matches(&phrase.to_lowercase()).count() as u32;
            if occurrences > 0 {
                record(phrase, occurrences, weight);
            }
        }
        for token in tokenize(line) {
            if is_candidate(&token.to_lowercase()) {
                record(&token, 1, weight);
            }
        }
    }

    let mut tallies: Vec<Tally> = tallies.into_values().collect();
    tallies.sort_by(|a, b| {
        let score_a = a.frequency as f32 * a.weight;
        let score_b = b.frequency as f32 * b.weight;
        score_b
            .total_cmp(&score_a)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });

    tallies
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|t| KeywordEntry {
            weighted_score: t.frequency as f32 * t.weight,
            keyword: t.spelling,
            frequency: t.frequency,
            position_weight: t.weight,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTUP_JD: &str = r#"
        Senior Rust Engineer
        We move fast and own everything end-to-end with Kubernetes and Kafka.
        Requirements: 5+ years Rust, PostgreSQL, CI/CD pipelines.
        Nice to have: Node.js or C++ exposure.
    "#;

    fn find<'a>(inventory: &'a [KeywordEntry], kw: &str) -> Option<&'a KeywordEntry> {
        inventory.iter().find(|k| k.keyword.eq_ignore_ascii_case(kw))
    }

    #[test]
    fn test_tokenize_keeps_tech_punctuation() {
        let tokens = tokenize("Node.js, C++, C#, CI/CD and (Go).");
        assert_eq!(tokens, vec!["Node.js", "C++", "C#", "CI/CD", "and", "Go"]);
    }

    #[test]
    fn test_title_keyword_gets_title_weight() {
        let inventory = extract_keywords(STARTUP_JD);
        let rust = find(&inventory, "rust").unwrap();
        assert_eq!(rust.frequency, 2);
        assert!((rust.position_weight - TITLE_WEIGHT).abs() < f32::EPSILON);
        assert!((rust.weighted_score - 2.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_requirement_line_weight() {
        let inventory = extract_keywords(STARTUP_JD);
        let pg = find(&inventory, "postgresql").unwrap();
        assert!((pg.position_weight - REQUIREMENT_WEIGHT).abs() < f32::EPSILON);
        let kafka = find(&inventory, "kafka").unwrap();
        assert!((kafka.position_weight - BODY_WEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_stop_words_and_numbers_dropped() {
        let inventory = extract_keywords(STARTUP_JD);
        assert!(find(&inventory, "the").is_none());
        assert!(find(&inventory, "years").is_none());
        assert!(find(&inventory, "5+").is_none());
    }

    #[test]
    fn test_sorted_by_weighted_score() {
        let inventory = extract_keywords(STARTUP_JD);
        assert_eq!(inventory[0].keyword, "Rust");
        for pair in inventory.windows(2) {
            assert!(pair[0].weighted_score >= pair[1].weighted_score);
        }
    }

    #[test]
    fn test_first_spelling_wins() {
        let inventory = extract_keywords("GraphQL developer\nWe use graphql daily");
        assert_eq!(find(&inventory, "graphql").unwrap().keyword, "GraphQL");
    }

    #[test]
    fn test_known_phrases_are_single_keywords() {
        let inventory = extract_keywords("ML Engineer\nRequirements: machine learning, Python");
        let phrase = find(&inventory, "machine learning").unwrap();
        assert_eq!(phrase.keyword, "Machine Learning");
        assert!((phrase.position_weight - REQUIREMENT_WEIGHT).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_input_yields_empty_inventory() {
        assert!(extract_keywords("   \n  ").is_empty());
    }

    #[test]
    fn test_inventory_is_capped() {
        let jd: String = (0..100).map(|i| format!("tool{i} ")).collect();
        assert_eq!(extract_keywords(&jd).len(), MAX_KEYWORDS);
    }
}
