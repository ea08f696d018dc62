use crate::models::Persona;
use serde_json::Value;

pub const UNCLASSIFIED_NAME: &str = "Unclassified Persona";
pub const UNPARSABLE_NAME: &str = "Unclassified Persona (Parsing Error)";
const NO_DESCRIPTION: &str = "No description available.";

/// Remove a surrounding Markdown code fence (```` ```json ... ``` ````)
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();

    if let Some(rest) = text.strip_prefix("```") {
        // Drop the language tag on the opening line, if any
        text = match rest.find('\n') {
            Some(newline) if is_language_tag(rest[..newline].trim()) => &rest[newline + 1..],
            Some(_) => rest,
            None => rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric()),
        };
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

fn is_language_tag(tag: &str) -> bool {
    tag.chars().all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-'))
}

/// Parse a classification payload as JSON after fence removal
pub fn parse_classification(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(strip_code_fence(raw))
}

impl Persona {
    /// Interpret a classification payload. Never fails:
    /// JSON persona, then the line parser, then a placeholder embedding `raw`.
    pub fn from_classification(raw: &str) -> Persona {
        let text = strip_code_fence(raw);

        match serde_json::from_str::<Persona>(text) {
            Ok(persona) => persona,
            Err(e) => {
                tracing::warn!("Classification is not a JSON persona: {}", e);
                match parse_sections(text) {
                    Some(persona) => persona,
                    None => Persona {
                        name: UNPARSABLE_NAME.to_string(),
                        description: format!("The AI returned an unparsable response. Raw output: {}", text),
                        details: vec!["Please check the logs for the full error.".to_string()],
                    },
                }
            }
        }
    }

    pub fn placeholder() -> Persona {
        Persona {
            name: UNCLASSIFIED_NAME.to_string(),
            description: NO_DESCRIPTION.to_string(),
            details: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Persona,
    Description,
    Suggestions,
}

enum Line<'a> {
    Header(Section, &'a str),
    ListItem(&'a str),
    Text,
}

const HEADERS: [(&str, Section); 3] = [
    ("persona:", Section::Persona),
    ("description:", Section::Description),
    ("suggestions:", Section::Suggestions),
];

fn classify_line(line: &str) -> Line<'_> {
    for (prefix, section) in HEADERS {
        let head = line.get(..prefix.len());
        if head.is_some_and(|h| h.eq_ignore_ascii_case(prefix)) {
            return Line::Header(section, line[prefix.len()..].trim());
        }
    }

    let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    if digits > 0 {
        if let Some(item) = line[digits..].strip_prefix('.') {
            return Line::ListItem(item.trim());
        }
    }

    Line::Text
}

/// Line-oriented persona text parser
///
/// ```text
/// Persona: <name>
/// Description: <text>
/// <more description text>
/// Suggestions:
/// 1. <item>
/// 2. <item>
/// ```
///
/// Headers are case-insensitive. Falls back to a placeholder persona when no
/// header is present.
pub fn parse_persona_text(text: &str) -> Persona {
    parse_sections(text).unwrap_or_else(Persona::placeholder)
}

fn parse_sections(text: &str) -> Option<Persona> {
    let mut section = Section::None;
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;
    let mut details = Vec::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        match classify_line(line) {
            Line::Header(next, rest) => {
                section = next;
                match next {
                    Section::Persona => name = Some(rest.to_string()),
                    Section::Description => description = Some(rest.to_string()),
                    Section::Suggestions if !rest.is_empty() => details.push(rest.to_string()),
                    _ => {}
                }
            }
            Line::ListItem(item) if section == Section::Suggestions => {
                if !item.is_empty() {
                    details.push(item.to_string());
                }
            }
            Line::ListItem(_) | Line::Text if section == Section::Description => {
                let desc = description.get_or_insert_with(String::new);
                if !desc.is_empty() {
                    desc.push(' ');
                }
                desc.push_str(line);
            }
            _ => {}
        }
    }

    if section == Section::None {
        return None;
    }

    Some(Persona {
        name: name.filter(|n| !n.is_empty()).unwrap_or_else(|| UNCLASSIFIED_NAME.to_string()),
        description: description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        details,
    })
}
