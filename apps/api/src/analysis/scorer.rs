//! Section scorer — pure regex heuristics over extracted resume text.
//!
//! Each of the six sections has a single fixed detector, first match wins.
//! The heuristic is intentionally rigid: no handling of merged or reordered
//! sections, and scores depend on its exact behavior.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::models::analysis::AnalysisResult;

/// The six fixed resume sections, in detection order.
const SECTIONS: &[&str] = &[
    "contact",
    "education",
    "experience",
    "skills",
    "projects",
    "achievements",
];

static SECTION_DETECTORS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    vec![
        (
            "contact",
            Regex::new(r"(?mi)^\s*contact(\s+(info|information|details))?\s*:?").unwrap(),
        ),
        ("education", Regex::new(r"(?mi)^\s*education\s*:?").unwrap()),
        (
            "experience",
            Regex::new(r"(?mi)^\s*(work\s+|professional\s+)?experience\s*:?").unwrap(),
        ),
        (
            "skills",
            Regex::new(r"(?mi)^\s*(technical\s+)?skills\s*:?").unwrap(),
        ),
        (
            "projects",
            Regex::new(r"(?mi)^\s*(personal\s+)?projects?\s*:?").unwrap(),
        ),
        (
            "achievements",
            Regex::new(r"(?mi)^\s*(achievements?|accomplishments?|awards?)\s*:?").unwrap(),
        ),
    ]
});

/// Verbs that signal ownership of an outcome. Counted per occurrence,
/// case-insensitively, across the whole document.
const ACTION_VERBS: &[&str] = &[
    "led",
    "managed",
    "developed",
    "created",
    "implemented",
    "designed",
    "achieved",
];

static ACTION_VERB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"(?i)\b({})\b", ACTION_VERBS.join("|"))).unwrap());

const MIN_TOTAL_WORDS: usize = 200;
const MAX_TOTAL_WORDS: usize = 1000;
const MIN_ACTION_VERBS: usize = 5;

/// Word count of the segment between a section marker and the next blank
/// line. `None` when the detector finds no marker.
fn section_word_count(text: &str, detector: &Regex) -> Option<usize> {
    let marker = detector.find(text)?;
    let rest = &text[marker.end()..];
    let segment = match rest.find("\n\n") {
        Some(end) => &rest[..end],
        None => rest,
    };
    Some(segment.split_whitespace().count())
}

/// Step-function section score: absent 0, thin 40, moderate 70, solid 90,
/// full 100.
fn score_section(word_count: Option<usize>) -> u32 {
    match word_count {
        None => 0,
        Some(n) if n < 20 => 40,
        Some(n) if n < 50 => 70,
        Some(n) if n < 100 => 90,
        Some(_) => 100,
    }
}

/// Scores resume text against the fixed heuristics. Pure and deterministic;
/// empty or unrecognizable text yields all-absent sections and overall 0.
pub fn analyze_resume_text(text: &str) -> AnalysisResult {
    let mut scores = BTreeMap::new();
    let mut findings = Vec::new();
    let mut recommendations = Vec::new();

    for (name, detector) in SECTION_DETECTORS.iter() {
        let word_count = section_word_count(text, detector);
        scores.insert((*name).to_string(), score_section(word_count));

        match word_count {
            None => recommendations
                .push(format!("Add a {name} section to strengthen your resume.")),
            Some(n) if n < 20 => {
                recommendations.push(format!("Expand your {name} section with more detail."))
            }
            Some(_) => findings.push(format!("Strong {name} section.")),
        }
    }

    let total_words = text.split_whitespace().count();
    if total_words < MIN_TOTAL_WORDS {
        recommendations.push(
            "Your resume looks short. Add more detail about your experience and skills."
                .to_string(),
        );
    } else if total_words > MAX_TOTAL_WORDS {
        recommendations
            .push("Your resume is quite long. Consider trimming it for conciseness.".to_string());
    }

    let verb_count = ACTION_VERB_RE.find_iter(text).count();
    if verb_count < MIN_ACTION_VERBS {
        recommendations.push(format!(
            "Use more action verbs ({}) to describe your work.",
            ACTION_VERBS.join(", ")
        ));
    } else {
        findings.push(format!("Good use of action verbs ({verb_count} found)"));
    }

    let overall_score =
        (scores.values().map(|&s| f64::from(s)).sum::<f64>() / SECTIONS.len() as f64).round()
            as u32;

    AnalysisResult {
        overall_score,
        scores,
        findings,
        recommendations,
    }
}
