//! Best-effort place-name extraction from a chat message.
//!
//! This is a pre-filter, not an NLP extractor. It returns candidate strings
//! in priority order; the chat pipeline geocodes them one by one and keeps
//! the first that resolves.

use regex::Regex;

/// One word of a place name ("São", "Winston-Salem", "Martha's")
const WORD: &str = r"\p{L}[\p{L}'\-]*";

/// Words that end a lowercase place run ("tokyo please" → "tokyo")
const STOP_WORDS: &[&str] = &[
    "a", "about", "an", "and", "are", "at", "be", "but", "by", "can", "could", "do", "does",
    "during", "example", "for", "from", "general", "heat", "help", "how", "i", "if", "in", "is",
    "it", "its", "me", "my", "need", "now", "of", "on", "or", "order", "our", "particular",
    "please", "right", "should", "so", "summer", "terms", "thanks", "that", "the", "these",
    "they", "this", "those", "to", "today", "us", "was", "we", "what", "when", "where", "which",
    "while", "who", "why", "will", "winter", "with", "would", "you", "your",
];

pub struct LocationExtractor {
    /// `in` / `at` / `for` followed by a word run, any case
    prepositions: Vec<Regex>,
    /// "Austin, TX" / "Lyon, France" without a leading preposition
    comma: Regex,
    word: Regex,
}

impl LocationExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        let run = format!(r"{WORD}(?:[ \t]+{WORD})*(?:,\s*{WORD}(?:[ \t]+{WORD})*)*");

        let prepositions = ["in", "at", "for"]
            .iter()
            .map(|p| Regex::new(&format!(r"(?i:\b{p})\s+({run})")))
            .collect::<Result<Vec<_>, _>>()?;

        let comma = Regex::new(
            r"(\p{Lu}\p{Ll}+(?:\s+\p{Lu}\p{Ll}+)*(?:,\s*\p{Lu}\p{Lu}\b|,\s*\p{Lu}\p{Ll}+)+)",
        )?;

        Ok(Self {
            prepositions,
            comma,
            word: Regex::new(WORD)?,
        })
    }

    /// Ordered, de-duplicated candidates (first usable match per pattern)
    pub fn candidates(&self, message: &str) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();

        for pattern in &self.prepositions {
            if let Some(candidate) = self.first_preposition_match(pattern, message) {
                push_unique(&mut out, candidate);
            }
        }

        if let Some(m) = self.comma.captures(message).and_then(|c| c.get(1)) {
            push_unique(&mut out, m.as_str().trim().to_string());
        }

        out
    }

    /// Scan forward until a match survives trimming. The next search starts
    /// inside the previous run so "the summer in phoenix" still finds "phoenix".
    fn first_preposition_match(&self, pattern: &Regex, message: &str) -> Option<String> {
        let mut pos = 0;

        while let Some(caps) = pattern.captures_at(message, pos) {
            let run = caps.get(1)?;
            let place = self.trim_place(run.as_str());
            if !place.is_empty() {
                return Some(place.to_string());
            }
            pos = run.start();
        }

        None
    }

    /// Cut a captured run back to the place name.
    ///
    /// A capitalised run ends at the first lowercase word ("Lagos port" →
    /// "Lagos"); a lowercase run ends at the first stop word.
    fn trim_place<'a>(&self, run: &'a str) -> &'a str {
        let title_case = run.chars().next().is_some_and(char::is_uppercase);
        let mut end = 0;

        for m in self.word.find_iter(run) {
            let word = m.as_str();
            if title_case && !word.chars().next().is_some_and(char::is_uppercase) {
                break;
            }
            if STOP_WORDS.contains(&word.to_lowercase().as_str()) {
                break;
            }
            end = m.end();
        }

        &run[..end]
    }
}

fn push_unique(out: &mut Vec<String>, candidate: String) {
    if !candidate.is_empty() && !out.contains(&candidate) {
        out.push(candidate);
    }
}
