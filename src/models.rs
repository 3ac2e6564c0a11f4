//! Normalized hadith records and the search filters applied to them.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Scholarly authenticity classification.
///
/// Upstream grade text is free-form; anything not recognized collapses to
/// [`Grade::Unknown`] so the vocabulary seen by callers stays closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    Sahih,
    Hasan,
    #[serde(rename = "Da'if")]
    Daif,
    #[serde(rename = "Mawdu'")]
    Mawdu,
    Unknown,
}

/// Display tone for a grade badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTone {
    Green,
    Yellow,
    Red,
    Gray,
}

impl Grade {
    pub const ALL: [Grade; 5] = [
        Grade::Sahih,
        Grade::Hasan,
        Grade::Daif,
        Grade::Mawdu,
        Grade::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Grade::Sahih => "Sahih",
            Grade::Hasan => "Hasan",
            Grade::Daif => "Da'if",
            Grade::Mawdu => "Mawdu'",
            Grade::Unknown => "Unknown",
        }
    }

    /// Map an upstream grade label, case-insensitively.
    pub fn from_upstream(raw: &str) -> Grade {
        let folded: String = raw
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| match c {
                '\u{2019}' | '\u{2018}' | '`' => '\'',
                other => other,
            })
            .collect();

        match folded.as_str() {
            "sahih" => Grade::Sahih,
            "hasan" => Grade::Hasan,
            "daif" | "da'if" => Grade::Daif,
            "mawdu" | "mawdu'" | "maudu" | "maudu'" => Grade::Mawdu,
            _ => Grade::Unknown,
        }
    }

    pub fn tone(self) -> GradeTone {
        match self {
            Grade::Sahih => GradeTone::Green,
            Grade::Hasan => GradeTone::Yellow,
            Grade::Daif | Grade::Mawdu => GradeTone::Red,
            Grade::Unknown => GradeTone::Gray,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("unknown") {
            return Ok(Grade::Unknown);
        }
        match Grade::from_upstream(trimmed) {
            Grade::Unknown => Err(Error::Config(format!(
                "Unsupported grade '{}'; expected one of Sahih, Hasan, Da'if, Mawdu', Unknown",
                value
            ))),
            grade => Ok(grade),
        }
    }
}

/// A single normalized hadith.
///
/// Every string field is populated, with placeholder text when upstream
/// omits it. `id` and `reference` are always derived from
/// `(collection_id, hadith_number)` except for hand-authored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HadithRecord {
    pub id: String,
    pub primary_text: String,
    pub primary_text_arabic: String,
    pub narrator: String,
    pub collection_id: String,
    pub book_label: String,
    pub chapter_label: String,
    pub hadith_number: String,
    pub grade: Grade,
    pub reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl HadithRecord {
    /// Derived identity key: `{collection_id}-{hadith_number}`
    pub fn derive_id(collection_id: &str, hadith_number: &str) -> String {
        format!("{}-{}", collection_id, hadith_number)
    }

    /// Derived citation: `{collection_id} {hadith_number}`
    pub fn derive_reference(collection_id: &str, hadith_number: &str) -> String {
        format!("{} {}", collection_id, hadith_number)
    }

    /// Plain-text rendering used when copying or sharing a hadith
    pub fn share_text(&self) -> String {
        format!(
            "{}\n\n{}\n\nNarrator: {}\nReference: {}",
            self.primary_text_arabic, self.primary_text, self.narrator, self.reference
        )
    }
}

/// Filters accepted by search
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    /// Restrict the scan to one collection instead of the default pool
    pub collection_id: Option<String>,
    /// Keep only these grades; empty keeps everything
    pub grades: BTreeSet<Grade>,
    /// Keep only records whose narrator contains one of these names; empty keeps everything
    pub narrators: BTreeSet<String>,
}

impl SearchFilters {
    pub fn for_collection(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: Some(collection_id.into()),
            ..Default::default()
        }
    }

    /// Post-fetch predicate over grade and narrator
    pub fn accepts(&self, record: &HadithRecord) -> bool {
        if !self.grades.is_empty() && !self.grades.contains(&record.grade) {
            return false;
        }

        if !self.narrators.is_empty() {
            let narrator = record.narrator.to_lowercase();
            return self
                .narrators
                .iter()
                .any(|wanted| narrator.contains(&wanted.to_lowercase()));
        }

        true
    }
}
