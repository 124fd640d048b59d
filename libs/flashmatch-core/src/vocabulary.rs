//! Vocabulary bank: named levels mapped to pools of translation pairs.
//!
//! # JSON format
//! ```json
//! {
//!   "A1": [{ "en": "Cat (n)", "th": "แมว" }, ...],
//!   "A2": [...]
//! }
//! ```
//! Level order follows the order of keys in the document.

use crate::error::VocabularyError;
use crate::types::{VocabularyEntry, PAIRS_PER_ROUND};
use serde_json::{Map, Value};

/// Ordered collection of levels.
#[derive(Debug, Clone)]
pub struct VocabularyBank {
    levels: Vec<(String, Vec<VocabularyEntry>)>,
}

impl VocabularyBank {
    /// Build a bank, rejecting levels too small to deal a full round.
    pub fn new(levels: Vec<(String, Vec<VocabularyEntry>)>) -> Result<Self, VocabularyError> {
        if levels.is_empty() {
            return Err(VocabularyError::Empty);
        }
        for (level, entries) in &levels {
            if entries.len() < PAIRS_PER_ROUND {
                return Err(VocabularyError::LevelTooSmall {
                    level: level.clone(),
                    count: entries.len(),
                    required: PAIRS_PER_ROUND,
                });
            }
        }
        Ok(Self { levels })
    }

    /// Parse a bank from its JSON representation.
    pub fn from_json(content: &str) -> Result<Self, VocabularyError> {
        let document: Map<String, Value> = serde_json::from_str(content)?;
        let mut levels = Vec::with_capacity(document.len());
        for (level, entries) in document {
            let entries: Vec<VocabularyEntry> = serde_json::from_value(entries)?;
            levels.push((level, entries));
        }
        Self::new(levels)
    }

    /// Level names in declaration order.
    pub fn levels(&self) -> Vec<&str> {
        self.levels.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Entries for a level, if it exists.
    pub fn pool(&self, level: &str) -> Option<&[VocabularyEntry]> {
        self.levels
            .iter()
            .find(|(name, _)| name == level)
            .map(|(_, entries)| entries.as_slice())
    }
}

impl Default for VocabularyBank {
    /// The bank shipped with the game.
    fn default() -> Self {
        let level = |name: &str, pairs: &[(&str, &str)]| {
            (
                name.to_string(),
                pairs
                    .iter()
                    .map(|(en, th)| VocabularyEntry::new(*en, *th))
                    .collect(),
            )
        };

        Self {
            levels: vec![
                level(
                    "A1",
                    &[
                        ("Cat (n)", "แมว"),
                        ("Dog (n)", "สุนัข"),
                        ("Water (n)", "น้ำ"),
                        ("Eat (v)", "กิน"),
                        ("House (n)", "บ้าน"),
                        ("Big (adj)", "ใหญ่"),
                        ("Sleep (v)", "นอน"),
                        ("Book (n)", "หนังสือ"),
                        ("Happy (adj)", "มีความสุข"),
                        ("Red (adj)", "สีแดง"),
                    ],
                ),
                level(
                    "A2",
                    &[
                        ("Cook (v/n)", "ทำอาหาร"),
                        ("Travel (v)", "เดินทาง"),
                        ("Weather (n)", "สภาพอากาศ"),
                        ("Market (n)", "ตลาด"),
                        ("Quickly (adv)", "อย่างรวดเร็ว"),
                        ("Borrow (v)", "ยืม"),
                        ("Expensive (adj)", "แพง"),
                        ("Friendly (adj)", "เป็นมิตร"),
                        ("Under (prep)", "ใต้"),
                    ],
                ),
                level(
                    "B1",
                    &[
                        ("Achieve (v)", "บรรลุ"),
                        ("Opportunity (n)", "โอกาส"),
                        ("Reliable (adj)", "น่าเชื่อถือ"),
                        ("Environment (n)", "สิ่งแวดล้อม"),
                        ("Suggest (v)", "แนะนำ"),
                        ("Although (conj)", "แม้ว่า"),
                        ("Frequently (adv)", "บ่อยครั้ง"),
                        ("Confident (adj)", "มั่นใจ"),
                    ],
                ),
                level(
                    "B2",
                    &[
                        ("Negotiate (v)", "เจรจา"),
                        ("Consequence (n)", "ผลที่ตามมา"),
                        ("Reluctant (adj)", "ไม่เต็มใจ"),
                        ("Sustainable (adj)", "ยั่งยืน"),
                        ("Emphasize (v)", "เน้นย้ำ"),
                        ("Whereas (conj)", "ในขณะที่"),
                        ("Inevitably (adv)", "อย่างหลีกเลี่ยงไม่ได้"),
                        ("Perspective (n)", "มุมมอง"),
                    ],
                ),
            ],
        }
    }
}
