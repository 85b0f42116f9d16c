//! Country inference from free address text.

use crate::vat::{GERMANY, OTHER, POLAND};

/// One country label and the lowercase substrings that identify it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRule {
    pub label: String,
    pub synonyms: Vec<String>,
}

impl CountryRule {
    /// Rule for `label`; synonyms are lowercased.
    pub fn new<S: AsRef<str>>(label: impl Into<String>, synonyms: &[S]) -> Self {
        Self {
            label: label.into(),
            synonyms: synonyms
                .iter()
                .map(|s| s.as_ref().to_lowercase())
                .collect(),
        }
    }
}

/// Substring-based country detector.
///
/// Rules are tried in order and the first rule with a synonym contained in
/// the text (case-insensitively) wins. Text matching no rule yields the
/// fallback label. This is a containment heuristic: "Poland Street, Berlin,
/// Germany" is Polish under the default rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryDetector {
    rules: Vec<CountryRule>,
    fallback: String,
}

impl Default for CountryDetector {
    /// Polska ← polska/poland, Niemcy ← niemcy/germany, fallback Inne.
    fn default() -> Self {
        Self::new(
            vec![
                CountryRule::new(POLAND, &["polska", "poland"]),
                CountryRule::new(GERMANY, &["niemcy", "germany"]),
            ],
            OTHER,
        )
    }
}

impl CountryDetector {
    /// Detector trying `rules` in order, `fallback` when none match.
    pub fn new(rules: Vec<CountryRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Append a rule with the lowest priority.
    pub fn with_rule(mut self, rule: CountryRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The label of the first matching rule, or the fallback label.
    pub fn detect(&self, text: &str) -> &str {
        self.detect_known(text).unwrap_or(self.fallback.as_str())
    }

    /// The label of the first matching rule, `None` if nothing matches.
    pub fn detect_known(&self, text: &str) -> Option<&str> {
        let text = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| {
                rule.synonyms
                    .iter()
                    .any(|s| !s.is_empty() && text.contains(s.as_str()))
            })
            .map(|rule| rule.label.as_str())
    }

    /// Label returned for text matching no rule.
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// True if `label` is the fallback label.
    pub fn is_fallback(&self, label: &str) -> bool {
        label == self.fallback
    }
}

/// Detect with the default rules.
pub fn detect_country(text: &str) -> String {
    CountryDetector::default().detect(text).to_string()
}
