//! Turning raw upstream entries into [`HadithRecord`]s.
//!
//! English and Arabic section lists are aligned by position within the
//! section. Upstream does not guarantee the two editions paginate the same
//! way; when they differ, the pairing is wrong but every entry still yields
//! a record.

use crate::models::{Grade, HadithRecord};
use crate::upstream::RawHadith;

pub const ENGLISH_PLACEHOLDER: &str = "English text not available";
pub const ARABIC_PLACEHOLDER: &str = "النص العربي غير متوفر";
pub const NARRATOR_PLACEHOLDER: &str = "Various";

/// English and Arabic entries sharing a position within a section
#[derive(Debug, Clone, Copy)]
pub struct AlignedEntry<'a> {
    pub english: Option<&'a RawHadith>,
    pub arabic: Option<&'a RawHadith>,
}

impl<'a> AlignedEntry<'a> {
    pub fn english_text(&self) -> Option<&'a str> {
        self.english.and_then(RawHadith::body)
    }

    pub fn arabic_text(&self) -> Option<&'a str> {
        self.arabic.and_then(RawHadith::body)
    }

    pub fn narrator(&self) -> Option<&'a str> {
        self.english
            .and_then(|e| e.narrator.as_deref())
            .or_else(|| self.arabic.and_then(|a| a.narrator.as_deref()))
    }

    /// English numbering first, then the Arabic edition's own numbering
    fn hadith_number(&self) -> Option<&'a str> {
        self.english
            .and_then(|e| e.hadithnumber.as_deref())
            .or_else(|| self.arabic.and_then(|a| a.hadithnumber.as_deref()))
            .or_else(|| self.arabic.and_then(|a| a.arabicnumber.as_deref()))
    }

    fn book(&self) -> Option<&'a str> {
        self.english
            .and_then(RawHadith::book)
            .or_else(|| self.arabic.and_then(RawHadith::book))
    }

    fn chapter(&self) -> Option<&'a str> {
        self.english
            .and_then(|e| e.chapter.as_deref())
            .or_else(|| self.arabic.and_then(|a| a.chapter.as_deref()))
    }
}

/// Pair entries by index; the result is as long as the longer list.
pub fn align<'a>(english: &'a [RawHadith], arabic: &'a [RawHadith]) -> Vec<AlignedEntry<'a>> {
    let len = english.len().max(arabic.len());
    (0..len)
        .map(|i| AlignedEntry {
            english: english.get(i),
            arabic: arabic.get(i),
        })
        .collect()
}

/// Grade of the entry's first grading, `Unknown` when absent
pub fn grade_of(raw: Option<&RawHadith>) -> Grade {
    raw.and_then(RawHadith::first_grade)
        .map(Grade::from_upstream)
        .unwrap_or(Grade::Unknown)
}

/// Normalize an aligned pair found at `index` within `section`.
///
/// Without an upstream hadith number, one is synthesized as
/// `section * 100 + index + 1`.
pub fn normalize_aligned(
    entry: &AlignedEntry<'_>,
    collection_id: &str,
    section: u32,
    index: usize,
) -> HadithRecord {
    let hadith_number = entry
        .hadith_number()
        .map(str::to_string)
        .unwrap_or_else(|| (u64::from(section) * 100 + index as u64 + 1).to_string());

    let book = entry
        .book()
        .map(str::to_string)
        .unwrap_or_else(|| section.to_string());

    HadithRecord {
        id: HadithRecord::derive_id(collection_id, &hadith_number),
        primary_text: entry.english_text().unwrap_or(ENGLISH_PLACEHOLDER).to_string(),
        primary_text_arabic: entry.arabic_text().unwrap_or(ARABIC_PLACEHOLDER).to_string(),
        narrator: entry.narrator().unwrap_or(NARRATOR_PLACEHOLDER).to_string(),
        collection_id: collection_id.to_string(),
        book_label: format!("Book {}", book),
        chapter_label: entry
            .chapter()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Section {}", section)),
        reference: HadithRecord::derive_reference(collection_id, &hadith_number),
        grade: grade_of(entry.english.or(entry.arabic)),
        hadith_number,
        explanation: None,
    }
}

/// Normalize a point-lookup entry under the number it was requested by.
pub fn normalize_point(raw: &RawHadith, collection_id: &str, hadith_number: &str) -> HadithRecord {
    let book = raw.book().unwrap_or("1");

    HadithRecord {
        id: HadithRecord::derive_id(collection_id, hadith_number),
        primary_text: raw.body().unwrap_or(ENGLISH_PLACEHOLDER).to_string(),
        primary_text_arabic: raw.arabic_body().unwrap_or(ARABIC_PLACEHOLDER).to_string(),
        narrator: raw
            .narrator
            .as_deref()
            .unwrap_or(NARRATOR_PLACEHOLDER)
            .to_string(),
        collection_id: collection_id.to_string(),
        book_label: format!("Book {}", book),
        chapter_label: raw
            .chapter
            .clone()
            .unwrap_or_else(|| format!("Section {}", book)),
        hadith_number: hadith_number.to_string(),
        grade: grade_of(Some(raw)),
        reference: HadithRecord::derive_reference(collection_id, hadith_number),
        explanation: None,
    }
}
