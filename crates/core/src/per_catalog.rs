//! PER self-assessment question catalog.
//!
//! A PER form is identified by its form code (`a1` .. `a5`, plus the
//! `a3-2` sub-area) and every answer by a question id of the shape
//! `c<component>q<question>`. The concatenation of both is the catalog key.
//! The last question of every component is the "Component N performance"
//! summary rating.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::per_questions::QUESTIONS;

/// Form codes in catalog order, with their area titles.
pub const AREAS: &[(&str, &str)] = &[
    ("a1", "Policy, Strategy and Standards"),
    ("a2", "Analysis and Planning"),
    ("a3", "Operational Capacity"),
    ("a3-2", "Operational Capacity 2"),
    ("a4", "Coordination"),
    ("a5", "Operations Support"),
];

static INDEX: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| QUESTIONS.iter().copied().collect());

/// Parsed form of a catalog key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRef {
    /// Form code, e.g. `a3-2`.
    pub area: String,
    pub component: u32,
    pub question: u32,
}

/// One catalog entry as served by the API.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub area: String,
    pub component: u32,
    pub question: u32,
    pub text: &'static str,
    pub is_component_performance: bool,
}

/// Text of the question `question_id` on the form `form_code`.
///
/// Returns an empty string for codes the catalog does not know.
pub fn question_details(question_id: &str, form_code: &str) -> &'static str {
    let key = format!("{form_code}{question_id}");
    INDEX.get(key.as_str()).copied().unwrap_or("")
}

/// Look up a full catalog key such as `a1c0q0`.
pub fn lookup(code: &str) -> Option<&'static str> {
    INDEX.get(code).copied()
}

/// Whether `form_code` is one of the known PER areas.
pub fn is_known_area(form_code: &str) -> bool {
    AREAS.iter().any(|(code, _)| *code == form_code)
}

/// Parse `a<N>[-<M>]c<component>q<question>` into its parts.
pub fn parse_question_code(code: &str) -> Option<QuestionRef> {
    let c_pos = code.rfind('c')?;
    let (area, rest) = code.split_at(c_pos);
    if !area.starts_with('a') || area.len() < 2 {
        return None;
    }
    let area_tail = &area[1..];
    if !area_tail
        .split('-')
        .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }

    let (component, question) = parse_question_id(rest)?;
    Some(QuestionRef {
        area: area.to_string(),
        component,
        question,
    })
}

/// Parse a bare question id `c<component>q<question>`.
pub fn parse_question_id(question_id: &str) -> Option<(u32, u32)> {
    let rest = question_id.strip_prefix('c')?;
    let (component, question) = rest.split_once('q')?;
    Some((component.parse().ok()?, question.parse().ok()?))
}

/// Whether `code` is the closing "Component N performance" entry.
pub fn is_component_performance(code: &str) -> bool {
    lookup(code).is_some_and(|text| text.starts_with("Component ") && text.ends_with(" performance"))
}

/// A single catalog entry by its full key.
pub fn entry(code: &str) -> Option<CatalogEntry> {
    let (code, text) = INDEX.get_key_value(code).map(|(k, v)| (*k, *v))?;
    to_entry(code, text)
}

/// All catalog entries, optionally restricted to one form code.
pub fn entries(area: Option<&str>) -> Vec<CatalogEntry> {
    QUESTIONS
        .iter()
        .filter_map(|&(code, text)| to_entry(code, text))
        .filter(|e| area.map_or(true, |a| a == e.area))
        .collect()
}

fn to_entry(code: &'static str, text: &'static str) -> Option<CatalogEntry> {
    let parsed = parse_question_code(code)?;
    Some(CatalogEntry {
        code,
        area: parsed.area,
        component: parsed.component,
        question: parsed.question,
        text,
        is_component_performance: is_component_performance(code),
    })
}

/// Entries of one area in catalog order.
pub fn questions_for_area(area: &str) -> Vec<CatalogEntry> {
    entries(Some(area))
}

/// Number of entries in the catalog.
pub fn len() -> usize {
    QUESTIONS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_concatenates_form_code_and_question_id() {
        assert_eq!(
            question_details("c0q1", "a1"),
            "1.2 NS mandate is aligned with RCRC Fundamental Principles."
        );
    }

    #[test]
    fn unknown_code_yields_empty_text() {
        assert_eq!(question_details("c99q0", "a1"), "");
        assert_eq!(question_details("c0q0", "zz"), "");
    }

    #[test]
    fn keys_are_unique() {
        assert_eq!(INDEX.len(), QUESTIONS.len());
    }

    #[test]
    fn every_key_parses_to_a_known_area() {
        for (code, _) in QUESTIONS {
            let parsed = parse_question_code(code).expect("catalog key must parse");
            assert!(is_known_area(&parsed.area), "unknown area in {code}");
        }
    }

    #[test]
    fn parses_sub_area_codes() {
        let parsed = parse_question_code("a3-2c1q12").unwrap();
        assert_eq!(parsed.area, "a3-2");
        assert_eq!(parsed.component, 1);
        assert_eq!(parsed.question, 12);
    }

    #[test]
    fn rejects_malformed_codes() {
        assert!(parse_question_code("x1c0q0").is_none());
        assert!(parse_question_code("a1c0").is_none());
        assert!(parse_question_code("ac0q0").is_none());
        assert!(parse_question_id("c1qx").is_none());
    }

    #[test]
    fn component_performance_entries() {
        assert!(is_component_performance("a1c0q4"));
        assert!(!is_component_performance("a1c0q0"));
    }

    #[test]
    fn single_entry_lookup() {
        let e = entry("a1c0q4").unwrap();
        assert_eq!((e.area.as_str(), e.component, e.question), ("a1", 0, 4));
        assert!(e.is_component_performance);
        assert!(entry("a9c0q0").is_none());
    }

    #[test]
    fn area_filter_keeps_catalog_order() {
        let a1 = questions_for_area("a1");
        assert!(!a1.is_empty());
        assert!(a1.iter().all(|e| e.area == "a1"));
        assert_eq!(a1[0].code, "a1c0q0");
        assert_eq!(entries(None).len(), len());
    }
}
