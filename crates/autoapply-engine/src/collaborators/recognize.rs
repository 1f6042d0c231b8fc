//! Heuristic entity recognition over resume text.
//!
//! Stands in for a full NLP model behind the [`EntityRecognizer`] seam:
//! regexes for email and phone, a header-line heuristic for the person
//! name, and keyword scans for location and organization lines.

use autoapply_core::collab::{Entity, EntityLabel, EntityRecognizer};
use regex::Regex;

const ORG_KEYWORDS: &[&str] = &[
    "Inc", "LLC", "Ltd", "Corp", "GmbH", "University", "Institute", "Technologies",
];

pub struct RegexRecognizer {
    email_re: Regex,
    phone_re: Regex,
    name_re: Regex,
    location_re: Regex,
}

impl RegexRecognizer {
    pub fn new() -> Self {
        Self {
            email_re: Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
                .expect("email regex"),
            phone_re: Regex::new(r"\+?\d[\d\s().-]{7,}\d").expect("phone regex"),
            // Two to four capitalized words on a line of their own.
            name_re: Regex::new(r"^[A-Z][A-Za-z.'-]+(?: [A-Z][A-Za-z.'-]+){1,3}$")
                .expect("name regex"),
            location_re: Regex::new(r"(?im)^(?:address|location)\s*:\s*(.+)$")
                .expect("location regex"),
        }
    }
}

impl Default for RegexRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRecognizer for RegexRecognizer {
    fn entities(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();

        // The first standalone capitalized line is usually the header name.
        if let Some(name) = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .take(5)
            .find(|l| self.name_re.is_match(l))
        {
            entities.push(Entity {
                label: EntityLabel::Person,
                text: name.to_string(),
            });
        }

        if let Some(caps) = self.location_re.captures(text) {
            entities.push(Entity {
                label: EntityLabel::Location,
                text: caps[1].trim().to_string(),
            });
        }

        if let Some(org) = text
            .lines()
            .map(str::trim)
            .find(|l| ORG_KEYWORDS.iter().any(|k| l.contains(k)))
        {
            entities.push(Entity {
                label: EntityLabel::Organization,
                text: org.to_string(),
            });
        }

        if let Some(m) = self.email_re.find(text) {
            entities.push(Entity {
                label: EntityLabel::Email,
                text: m.as_str().to_string(),
            });
        }

        if let Some(m) = self.phone_re.find(text) {
            entities.push(Entity {
                label: EntityLabel::Phone,
                text: m.as_str().trim().to_string(),
            });
        }

        entities
    }

    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut current = String::new();
        for ch in text.chars() {
            if ch == '\n' {
                current.push(' ');
            } else {
                current.push(ch);
            }
            if matches!(ch, '.' | '!' | '?') {
                let sentence = current.trim().to_string();
                if !sentence.is_empty() {
                    sentences.push(sentence);
                }
                current.clear();
            }
        }
        let tail = current.trim().to_string();
        if !tail.is_empty() {
            sentences.push(tail);
        }
        sentences
    }
}
