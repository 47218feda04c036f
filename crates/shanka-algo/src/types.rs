//! Common Types and Constants
//!
//! Shared data structures used across all modules.

use serde::{Deserialize, Serialize};

// ==================== Constants ====================

/// Character-overlap ratio at or above which a Chinese-target answer is
/// accepted even without a substring relation. Heuristic; tune via
/// [`crate::grading::GraderOptions`] rather than editing this constant.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.70;

/// Full-width punctuation stripped by Chinese answer normalization.
pub const ZH_PUNCTUATION: &[char] = &[
    '，', '。', '！', '？', '；', '：', '、', '（', '）', '「', '」', '『', '』', '《', '》', '【',
    '】',
];

// ==================== Vocabulary Data ====================

/// One vocabulary entry, loaded from external data and never mutated.
///
/// The source data is loosely shaped, so every field defaults to an empty
/// string when absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// English word
    #[serde(default)]
    pub word: String,
    /// Chinese definition
    #[serde(default)]
    pub def: String,
    /// Part-of-speech label, e.g. "n." or "adj"
    #[serde(default)]
    pub pos: String,
    /// IPA pronunciation
    #[serde(default)]
    pub ipa: String,
    /// Example sentence
    #[serde(default)]
    pub sentence: String,
}

/// A named collection of vocabulary entries presented together.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordGroup {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub words: Vec<WordEntry>,
}

// ==================== Card State ====================

/// Per-card answer status. Re-grading simply overwrites the status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    #[default]
    Unanswered,
    Correct,
    Incorrect,
}

/// A vocabulary entry under quiz: the static entry plus mutable status.
///
/// IDs are unique within a group only, not globally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizItem {
    pub id: usize,
    pub status: AnswerStatus,
    #[serde(flatten)]
    pub entry: WordEntry,
}

/// Mutable state of one word group: its quiz items plus the active filter.
///
/// The filter controls which items are currently displayed; changing it
/// never mutates the items themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    pub items: Vec<QuizItem>,
    pub filter: AnswerStatus,
}

// ==================== Quiz Modes ====================

/// Quiz direction: which language the user is expected to answer in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizMode {
    /// Prompt is the English word, user answers with the Chinese definition.
    En2Zh,
    /// Prompt is the Chinese definition, user answers with the English word.
    Zh2En,
}

impl QuizMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "en2zh" => Some(QuizMode::En2Zh),
            "zh2en" => Some(QuizMode::Zh2En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuizMode::En2Zh => "en2zh",
            QuizMode::Zh2En => "zh2en",
        }
    }
}

// ==================== Grading I/O ====================

/// One grading request, as submitted for a quiz question.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    pub user_answer: String,
    pub correct_answer: String,
    pub mode: QuizMode,
}

/// Grading outcome for a single question.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeResult {
    pub is_correct: bool,
}

// ==================== Part of Speech ====================

/// Coarse part-of-speech category used for card theming.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PosType {
    Noun,
    Verb,
    Adj,
    Adv,
    Other,
}

impl PosType {
    /// Classify a raw part-of-speech label. Checks run in order, so a
    /// label matching several patterns takes the first.
    pub fn classify(pos: &str) -> Self {
        if pos.is_empty() {
            return PosType::Other;
        }
        let p = pos.to_lowercase();
        if p.contains("n.") {
            PosType::Noun
        } else if p.contains("v.") {
            PosType::Verb
        } else if p.contains("adj") {
            PosType::Adj
        } else if p.contains("adv") {
            PosType::Adv
        } else {
            PosType::Other
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    // ============ QuizMode 测试 ============

    #[test]
    fn test_quiz_mode_from_str() {
        assert_eq!(QuizMode::from_str("en2zh"), Some(QuizMode::En2Zh));
        assert_eq!(QuizMode::from_str("zh2en"), Some(QuizMode::Zh2En));
        assert_eq!(QuizMode::from_str("EN2ZH"), Some(QuizMode::En2Zh));
        assert_eq!(QuizMode::from_str(""), None);
        assert_eq!(QuizMode::from_str("zh2en "), None);
        assert_eq!(QuizMode::from_str("en-zh"), None);
    }

    #[test]
    fn test_quiz_mode_roundtrip() {
        for mode in [QuizMode::En2Zh, QuizMode::Zh2En] {
            assert_eq!(QuizMode::from_str(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_quiz_mode_serde() {
        let json = serde_json::to_string(&QuizMode::En2Zh).unwrap();
        assert_eq!(json, "\"en2zh\"");
        let back: QuizMode = serde_json::from_str("\"zh2en\"").unwrap();
        assert_eq!(back, QuizMode::Zh2En);
    }

    // ============ AnswerStatus 测试 ============

    #[test]
    fn test_answer_status_default() {
        assert_eq!(AnswerStatus::default(), AnswerStatus::Unanswered);
    }

    #[test]
    fn test_answer_status_serde_tags() {
        assert_eq!(
            serde_json::to_string(&AnswerStatus::Unanswered).unwrap(),
            "\"unanswered\""
        );
        assert_eq!(
            serde_json::to_string(&AnswerStatus::Correct).unwrap(),
            "\"correct\""
        );
        assert_eq!(
            serde_json::to_string(&AnswerStatus::Incorrect).unwrap(),
            "\"incorrect\""
        );
    }

    // ============ WordEntry 测试 ============

    #[test]
    fn test_word_entry_missing_fields_default_empty() {
        let entry: WordEntry = serde_json::from_str(r#"{"word": "cat"}"#).unwrap();
        assert_eq!(entry.word, "cat");
        assert_eq!(entry.def, "");
        assert_eq!(entry.pos, "");
        assert_eq!(entry.ipa, "");
        assert_eq!(entry.sentence, "");
    }

    #[test]
    fn test_word_group_parse() {
        let json = r#"[{"title": "Unit 1", "words": [{"word": "cat", "def": "貓"}]}]"#;
        let groups: Vec<WordGroup> = serde_json::from_str(json).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].title, "Unit 1");
        assert_eq!(groups[0].words[0].def, "貓");
    }

    #[test]
    fn test_quiz_item_flatten() {
        let item = QuizItem {
            id: 3,
            status: AnswerStatus::Correct,
            entry: WordEntry {
                word: "run".to_string(),
                ..WordEntry::default()
            },
        };
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.contains("\"word\":\"run\""));
        assert!(json.contains("\"status\":\"correct\""));
        let back: QuizItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }

    // ============ PosType 测试 ============

    #[test]
    fn test_pos_type_classify() {
        assert_eq!(PosType::classify("n."), PosType::Noun);
        assert_eq!(PosType::classify("N. [C]"), PosType::Noun);
        assert_eq!(PosType::classify("v."), PosType::Verb);
        assert_eq!(PosType::classify("adj"), PosType::Adj);
        assert_eq!(PosType::classify("adj."), PosType::Adj);
        assert_eq!(PosType::classify("adv"), PosType::Adv);
        assert_eq!(PosType::classify("prep."), PosType::Other);
        assert_eq!(PosType::classify(""), PosType::Other);
    }

    #[test]
    fn test_zh_punctuation_set() {
        assert_eq!(ZH_PUNCTUATION.len(), 17);
        assert!(ZH_PUNCTUATION.contains(&'，'));
        assert!(ZH_PUNCTUATION.contains(&'】'));
        assert!(!ZH_PUNCTUATION.contains(&','));
    }
}
