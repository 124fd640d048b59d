//! Dictionary response normalization.
//!
//! Vocabulary strings carry part-of-speech hints in parentheses, for example
//! `"Cook (v/n)"`. The hint-free term is what gets looked up; the hints narrow
//! which meanings are shown.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Definitions shown per part of speech.
pub const MAX_DEFINITIONS_PER_PART: usize = 2;

/// Raw meaning blocks shown when no hinted part of speech was found.
pub const MAX_FALLBACK_MEANINGS: usize = 3;

fn annotation_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*\(.*?\)\s*").expect("valid annotation regex"))
}

fn hint_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\((.*?)\)").expect("valid hint regex"))
}

// === Dictionary API types ===

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub meanings: Vec<Meaning>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Phonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

// === Display types ===

/// Definitions for one part of speech.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeaningSection {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
}

/// Display-ready lookup result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordDetails {
    /// The vocabulary string as shown on the card.
    pub original: String,
    /// The term sent to the dictionary.
    pub term: String,
    pub phonetic: Option<String>,
    pub sections: Vec<MeaningSection>,
    /// True when hints matched nothing and raw meanings are shown instead.
    pub unfiltered: bool,
}

/// Strip parenthetical annotations: `"Cook (v/n)"` becomes `"Cook"`.
pub fn clean_term(display: &str) -> String {
    annotation_re().replace_all(display, "").trim().to_string()
}

/// Expand a short part-of-speech tag to the dictionary's name for it.
pub fn expand_tag(tag: &str) -> &str {
    match tag {
        "n" => "noun",
        "v" => "verb",
        "adj" => "adjective",
        "adv" => "adverb",
        "prep" => "preposition",
        "pron" => "pronoun",
        "conj" => "conjunction",
        "interj" => "interjection",
        other => other,
    }
}

/// Part-of-speech hints from the first parenthetical, in written order.
pub fn pos_hints(display: &str) -> Vec<String> {
    let Some(captures) = hint_re().captures(display) else {
        return Vec::new();
    };
    captures[1]
        .split('/')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(|tag| expand_tag(tag).to_string())
        .collect()
}

/// First phonetic transcription across all entries.
///
/// The top-level `phonetic` field wins; otherwise the first non-empty
/// `phonetics[].text` is used.
pub fn first_phonetic(entries: &[DictionaryEntry]) -> Option<String> {
    let top_level = entries
        .iter()
        .filter_map(|entry| entry.phonetic.as_deref());
    let listed = entries
        .iter()
        .flat_map(|entry| entry.phonetics.iter())
        .filter_map(|phonetic| phonetic.text.as_deref());

    top_level
        .chain(listed)
        .find(|text| !text.is_empty())
        .map(str::to_string)
}

/// First pronunciation clip URL across all entries.
pub fn first_audio(entries: &[DictionaryEntry]) -> Option<&str> {
    entries
        .iter()
        .flat_map(|entry| entry.phonetics.iter())
        .filter_map(|phonetic| phonetic.audio.as_deref())
        .find(|audio| !audio.is_empty())
}

/// Merge every entry's meanings into per-part-of-speech groups, keeping the
/// order in which parts of speech first appear.
fn group_by_part(entries: &[DictionaryEntry]) -> Vec<MeaningSection> {
    let mut sections: Vec<MeaningSection> = Vec::new();
    for meaning in entries.iter().flat_map(|entry| entry.meanings.iter()) {
        match sections
            .iter_mut()
            .find(|section| section.part_of_speech == meaning.part_of_speech)
        {
            Some(section) => section.definitions.extend(meaning.definitions.iter().cloned()),
            None => sections.push(MeaningSection {
                part_of_speech: meaning.part_of_speech.clone(),
                definitions: meaning.definitions.clone(),
            }),
        }
    }
    sections
}

/// Build the review panel contents for `display` from a dictionary response.
pub fn summarize(display: &str, entries: &[DictionaryEntry]) -> WordDetails {
    let hints = pos_hints(display);
    let mut grouped = group_by_part(entries);

    let (sections, unfiltered) = if hints.is_empty() {
        (grouped, false)
    } else {
        let mut selected = Vec::new();
        for hint in &hints {
            if let Some(idx) = grouped
                .iter()
                .position(|section| &section.part_of_speech == hint)
            {
                selected.push(grouped.remove(idx));
            }
        }

        if selected.is_empty() {
            let raw = entries
                .iter()
                .flat_map(|entry| entry.meanings.iter())
                .take(MAX_FALLBACK_MEANINGS)
                .map(|meaning| MeaningSection {
                    part_of_speech: meaning.part_of_speech.clone(),
                    definitions: meaning.definitions.iter().take(1).cloned().collect(),
                })
                .collect();
            (raw, true)
        } else {
            (selected, false)
        }
    };

    let sections = sections
        .into_iter()
        .map(|mut section| {
            section.definitions.truncate(MAX_DEFINITIONS_PER_PART);
            section
        })
        .collect();

    WordDetails {
        original: display.to_string(),
        term: clean_term(display),
        phonetic: first_phonetic(entries),
        sections,
        unfiltered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn definition(text: &str) -> Definition {
        Definition {
            definition: text.to_string(),
            example: None,
        }
    }

    fn meaning(part: &str, defs: &[&str]) -> Meaning {
        Meaning {
            part_of_speech: part.to_string(),
            definitions: defs.iter().map(|d| definition(d)).collect(),
        }
    }

    fn entry(meanings: Vec<Meaning>) -> DictionaryEntry {
        DictionaryEntry {
            word: "cook".to_string(),
            meanings,
            ..Default::default()
        }
    }

    fn parts(details: &WordDetails) -> Vec<&str> {
        details
            .sections
            .iter()
            .map(|s| s.part_of_speech.as_str())
            .collect()
    }

    #[test]
    fn clean_term_strips_annotations() {
        assert_eq!(clean_term("Cook (v/n)"), "Cook");
        assert_eq!(clean_term("  Water (n) "), "Water");
        assert_eq!(clean_term("Ice cream"), "Ice cream");
        assert_eq!(clean_term("(adj)"), "");
    }

    #[test]
    fn hints_expand_short_tags_in_order() {
        assert_eq!(pos_hints("Cook (v/n)"), vec!["verb", "noun"]);
        assert_eq!(pos_hints("Under ( prep )"), vec!["preposition"]);
        assert_eq!(pos_hints("Wow (interj)"), vec!["interjection"]);
        assert_eq!(pos_hints("Thing (phrase)"), vec!["phrase"]);
        assert!(pos_hints("Cat").is_empty());
        assert!(pos_hints("Cat ()").is_empty());
    }

    #[test]
    fn merges_meanings_across_entries() {
        let entries = vec![
            entry(vec![meaning("noun", &["a chef"])]),
            entry(vec![meaning("verb", &["to prepare food"]), meaning("noun", &["a galley hand"])]),
        ];
        let details = summarize("Cook", &entries);
        assert_eq!(parts(&details), vec!["noun", "verb"]);
        assert_eq!(
            details.sections[0].definitions,
            vec![definition("a chef"), definition("a galley hand")]
        );
        assert!(!details.unfiltered);
    }

    #[test]
    fn hints_filter_and_order_sections() {
        let entries = vec![entry(vec![
            meaning("noun", &["a chef"]),
            meaning("adjective", &["cooked"]),
            meaning("verb", &["to prepare food"]),
        ])];
        let details = summarize("Cook (v/n)", &entries);
        assert_eq!(parts(&details), vec!["verb", "noun"]);
        assert_eq!(details.term, "Cook");
        assert_eq!(details.original, "Cook (v/n)");
    }

    #[test]
    fn missing_hinted_parts_are_skipped() {
        let entries = vec![entry(vec![meaning("noun", &["a chef"])])];
        let details = summarize("Cook (v/n)", &entries);
        assert_eq!(parts(&details), vec!["noun"]);
    }

    #[test]
    fn unmatched_hints_fall_back_to_raw_meanings() {
        let entries = vec![entry(vec![
            meaning("noun", &["n1", "n2"]),
            meaning("verb", &["v1"]),
            meaning("noun", &["n3"]),
            meaning("adjective", &["a1"]),
        ])];
        let details = summarize("Cook (adv)", &entries);
        assert!(details.unfiltered);
        assert_eq!(parts(&details), vec!["noun", "verb", "noun"]);
        assert_eq!(details.sections[0].definitions, vec![definition("n1")]);
    }

    #[test]
    fn definitions_capped_at_two() {
        let entries = vec![entry(vec![meaning("verb", &["one", "two", "three"])])];
        let details = summarize("Cook", &entries);
        assert_eq!(details.sections[0].definitions.len(), 2);
    }

    #[test]
    fn phonetic_and_audio_come_from_first_entry_that_has_them() {
        let mut first = entry(vec![]);
        first.phonetics = vec![Phonetic {
            text: Some("/kʊk/".to_string()),
            audio: Some(String::new()),
        }];
        let mut second = entry(vec![]);
        second.phonetic = Some("/kʊk/".to_string());
        second.phonetics = vec![Phonetic {
            text: None,
            audio: Some("https://audio.example/cook-us.mp3".to_string()),
        }];
        let entries = vec![first, second];

        assert_eq!(first_phonetic(&entries).as_deref(), Some("/kʊk/"));
        assert_eq!(first_audio(&entries), Some("https://audio.example/cook-us.mp3"));
    }

    #[test]
    fn phonetic_falls_back_to_listed_transcriptions() {
        let mut only_listed = entry(vec![]);
        only_listed.phonetic = Some(String::new());
        only_listed.phonetics = vec![
            Phonetic {
                text: Some(String::new()),
                audio: None,
            },
            Phonetic {
                text: Some("/kæt/".to_string()),
                audio: None,
            },
        ];
        assert_eq!(first_phonetic(&[only_listed]).as_deref(), Some("/kæt/"));
        assert_eq!(first_phonetic(&[entry(vec![])]), None);
    }

    #[test]
    fn decodes_dictionary_response() {
        let json = r#"[{
            "word": "cook",
            "phonetic": "/kʊk/",
            "phonetics": [{ "text": "/kʊk/", "audio": "" }],
            "meanings": [{
                "partOfSpeech": "verb",
                "definitions": [{ "definition": "To prepare food.", "example": "I cook daily.", "synonyms": [] }]
            }],
            "license": { "name": "CC BY-SA 3.0" }
        }]"#;
        let entries: Vec<DictionaryEntry> = serde_json::from_str(json).unwrap();
        let details = summarize("Cook (v)", &entries);
        assert_eq!(
            details.sections[0].definitions[0].example.as_deref(),
            Some("I cook daily.")
        );
        assert_eq!(details.phonetic.as_deref(), Some("/kʊk/"));
    }
}
