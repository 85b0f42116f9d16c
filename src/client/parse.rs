//! Free-text client block → structured [`Client`].

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::detect::CountryDetector;
use crate::core::Client;

/// A line mentioning NIP, TAX or VAT.
static TAX_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:nip|tax|vat)").expect("valid regex"));

/// `LABEL: value` or `LABEL value`, e.g. "NIP: 123-456-78-90",
/// "NIP 525-000-11-22" or "VAT ID: DE123456789". The value is an optional
/// two-letter prefix and a digit run (with separators) ending on a digit.
static LABELED_TAX_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:nip|tax|vat)[^:\n]*?[:\s]\s*([a-z]{0,2}\s?[0-9][0-9 ./-]*[0-9])")
        .expect("valid regex")
});

/// Digits a labeled value needs before it counts as a tax identifier.
const MIN_TAX_ID_DIGITS: usize = 6;

/// Country-code prefixed identifier, e.g. "PL1234567890".
static PREFIXED_TAX_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z]{2}[0-9]{6,14}\b").expect("valid regex"));

/// Bare identifier: prefixed or digits only.
static BARE_TAX_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:[A-Z]{2}[0-9]{6,14}|[0-9]{6,14})\b").expect("valid regex"));

/// Best-effort parser for pasted client details.
///
/// The input is read line by line (blank lines dropped, lines trimmed):
///
/// 1. the first line is the name;
/// 2. the last line is the country if the detector recognizes it, and is
///    then not part of the address;
/// 3. the first remaining line that looks like a tax identifier supplies
///    `tax_id` and is not part of the address;
/// 4. everything else is the address.
///
/// Parsing never fails. Unrecognized input ends up in the address.
///
/// ```
/// use faktura_vat::client::ClientTextParser;
///
/// let client = ClientTextParser::new().parse("Acme Corp\n5 Elm St\nNIP: PL1234567890\nGermany");
/// assert_eq!(client.name, "Acme Corp");
/// assert_eq!(client.address, "5 Elm St");
/// assert_eq!(client.country, "Niemcy");
/// assert_eq!(client.tax_id.as_deref(), Some("PL1234567890"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClientTextParser {
    detector: CountryDetector,
}

impl ClientTextParser {
    /// Parser with the default country rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parser that recognizes countries with `detector`.
    pub fn with_detector(detector: CountryDetector) -> Self {
        Self { detector }
    }

    /// The country detector used for the last line.
    pub fn detector(&self) -> &CountryDetector {
        &self.detector
    }

    /// Split `raw` into a [`Client`]. Never fails.
    pub fn parse(&self, raw: &str) -> Client {
        let mut lines: Vec<&str> = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if lines.is_empty() {
            return Client::default();
        }

        let name = lines.remove(0).to_string();

        let mut country = String::new();
        if let Some(label) = lines.last().and_then(|l| self.detector.detect_known(l)) {
            country = label.to_string();
            lines.pop();
        }

        let mut tax_id = None;
        if let Some((idx, id)) = lines
            .iter()
            .enumerate()
            .find_map(|(i, l)| extract_tax_id(l).map(|id| (i, id)))
        {
            tax_id = Some(id);
            lines.remove(idx);
        }

        debug!(
            country = %country,
            has_tax_id = tax_id.is_some(),
            address_lines = lines.len(),
            "parsed client text"
        );

        Client {
            name,
            address: lines.join("\n"),
            country,
            tax_id,
        }
    }
}

/// Parse with the default country rules.
pub fn parse_client(raw: &str) -> Client {
    ClientTextParser::new().parse(raw)
}

/// The tax identifier on `line`, if the line is a tax identifier line.
///
/// A line qualifies if it mentions NIP/TAX/VAT or contains a country-prefixed
/// number. The value comes from a `LABEL: value` (or `LABEL value`) pattern
/// if present, else from the first bare identifier. Text after the
/// identifier, such as a phone number, is not part of the value. A qualifying line with no extractable
/// value is not treated as a tax line.
pub fn extract_tax_id(line: &str) -> Option<String> {
    if !TAX_KEYWORD.is_match(line) && !PREFIXED_TAX_ID.is_match(line) {
        return None;
    }

    let labeled = LABELED_TAX_ID
        .captures_iter(line)
        .map(|caps| caps[1].trim().to_string())
        .find(|value| value.chars().filter(char::is_ascii_digit).count() >= MIN_TAX_ID_DIGITS);
    if labeled.is_some() {
        return labeled;
    }

    BARE_TAX_ID.find(line).map(|m| m.as_str().to_string())
}

/// Render a client in the line layout [`ClientTextParser`] reads: name,
/// address lines, `NIP: ...` if present, then country if set.
pub fn client_to_text(client: &Client) -> String {
    let tax_line = client.tax_id.as_ref().map(|id| format!("NIP: {id}"));
    let mut lines: Vec<&str> = vec![client.name.as_str()];
    lines.extend(client.address.lines());
    if let Some(tax_line) = &tax_line {
        lines.push(tax_line);
    }
    if !client.country.is_empty() {
        lines.push(&client.country);
    }
    lines.join("\n")
}
