use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Preference, TravelIntent};

/// Ordered matcher chains for the local extraction tier. Each pattern
/// captures the place name; the first pattern that matches wins.
static SOURCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bfrom\s+(.+?)(?:\s+to\b|\s*$)",
        r"(?i)\bstarting\s+(?:from\s+)?(.+?)(?:\s+to\b|\s*$)",
        r"(?i)\bleaving\s+(?:from\s+)?(.+?)(?:\s+to\b|\s*$)",
    ])
});

static DESTINATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?i)\bto\s+(.+?)(?:\s+from\b|\s*$)",
        r"(?i)\bgoing\s+to\s+(.+?)(?:\s+from\b|\s*$)",
        r"(?i)\bheading\s+to\s+(.+?)(?:\s+from\b|\s*$)",
        r"(?i)\bdestination\s+(.+?)(?:\s+from\b|\s*$)",
    ])
});

/// Keywords that suggest a word is part of a place name, used only when no
/// from/to pattern matched.
const LOCATION_KEYWORDS: &[&str] = &[
    "college",
    "airport",
    "mall",
    "hospital",
    "station",
    "gandhipuram",
    "kpr",
];

const CHEAP_KEYWORDS: &[&str] = &[
    "cheap",
    "budget",
    "affordable",
    "low cost",
    "save money",
    "economical",
    "inexpensive",
];

const FAST_KEYWORDS: &[&str] = &[
    "fast", "quick", "urgent", "hurry", "time", "speed", "rapid", "express",
];

const COMFORT_KEYWORDS: &[&str] = &[
    "comfort",
    "comfortable",
    "luxury",
    "premium",
    "relaxed",
    "cozy",
    "pleasant",
];

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("static pattern compiles"))
        .collect()
}

fn first_match(patterns: &[Regex], message: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        re.captures(message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    })
}

/// Deterministic regex-based extraction. Always produces an intent; both
/// endpoints may be absent when nothing in the message looks like a place.
pub fn parse_message(message: &str) -> TravelIntent {
    let mut source = first_match(&SOURCE_PATTERNS, message);
    let mut destination = first_match(&DESTINATION_PATTERNS, message);

    // No from/to marker anywhere: scan for known place keywords and take the
    // keyword word plus up to two following words as a place-name guess. The
    // first guess fills destination, the second fills source ("to" is the
    // more salient unmarked direction).
    if source.is_none() && destination.is_none() {
        let words: Vec<&str> = message.split_whitespace().collect();
        for i in 0..words.len() {
            let word = words[i].to_lowercase();
            if LOCATION_KEYWORDS.iter().any(|kw| word.contains(kw)) {
                let end = usize::min(i + 3, words.len());
                let guess = words[i..end].join(" ");
                if destination.is_none() {
                    destination = Some(guess);
                } else if source.is_none() {
                    source = Some(guess);
                }
            }
        }
    }

    TravelIntent::new(source, destination, detect_preference(message))
}

/// Keyword lists are checked in priority order: cost beats speed beats
/// comfort when a message mentions more than one.
pub fn detect_preference(message: &str) -> Preference {
    let lower = message.to_lowercase();

    if CHEAP_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Preference::Cheapest
    } else if FAST_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Preference::Fastest
    } else if COMFORT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        Preference::Comfortable
    } else {
        Preference::Unknown
    }
}
