//! Static reference data: known collections, chapter tables, study
//! categories and the hand-authored fallback hadith.

use crate::models::{Grade, HadithRecord};
use serde::Serialize;

/// Descriptive metadata for a known collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HadithCollectionMeta {
    pub id: &'static str,
    pub name: &'static str,
    pub name_arabic: &'static str,
    pub description: &'static str,
    pub total_hadiths: u32,
    pub compiler: &'static str,
    pub compilation_period: &'static str,
}

pub const COLLECTIONS: [HadithCollectionMeta; 6] = [
    HadithCollectionMeta {
        id: "bukhari",
        name: "Sahih al-Bukhari",
        name_arabic: "صحيح البخاري",
        description: "The most authentic collection of hadith compiled by Imam al-Bukhari",
        total_hadiths: 7563,
        compiler: "Imam Muhammad al-Bukhari",
        compilation_period: "810-870 CE",
    },
    HadithCollectionMeta {
        id: "muslim",
        name: "Sahih Muslim",
        name_arabic: "صحيح مسلم",
        description: "The second most authentic collection compiled by Imam Muslim",
        total_hadiths: 7190,
        compiler: "Imam Muslim ibn al-Hajjaj",
        compilation_period: "817-875 CE",
    },
    HadithCollectionMeta {
        id: "abudawud",
        name: "Sunan Abu Dawud",
        name_arabic: "سنن أبي داود",
        description: "A comprehensive collection focusing on legal matters",
        total_hadiths: 5274,
        compiler: "Imam Abu Dawud",
        compilation_period: "817-889 CE",
    },
    HadithCollectionMeta {
        id: "tirmidhi",
        name: "Jami' at-Tirmidhi",
        name_arabic: "جامع الترمذي",
        description: "A comprehensive collection with detailed commentary",
        total_hadiths: 3956,
        compiler: "Imam at-Tirmidhi",
        compilation_period: "824-892 CE",
    },
    HadithCollectionMeta {
        id: "nasai",
        name: "Sunan an-Nasa'i",
        name_arabic: "سنن النسائي",
        description: "A collection known for its strict criteria",
        total_hadiths: 5761,
        compiler: "Imam an-Nasa'i",
        compilation_period: "829-915 CE",
    },
    HadithCollectionMeta {
        id: "ibnmajah",
        name: "Sunan Ibn Majah",
        name_arabic: "سنن ابن ماجه",
        description: "The sixth book of the Kutub al-Sittah",
        total_hadiths: 4341,
        compiler: "Imam Ibn Majah",
        compilation_period: "824-887 CE",
    },
];

/// Look up a collection by id, case-insensitively
pub fn find_collection(id: &str) -> Option<&'static HadithCollectionMeta> {
    COLLECTIONS
        .iter()
        .find(|meta| meta.id.eq_ignore_ascii_case(id.trim()))
}

const DEFAULT_CHAPTER_COUNT: u32 = 50;

/// Number of chapters a collection is browsed as
pub fn chapter_count(collection_id: &str) -> u32 {
    match collection_id {
        "bukhari" => 97,
        "muslim" => 56,
        "abudawud" => 43,
        "tirmidhi" => 50,
        "nasai" => 51,
        "ibnmajah" => 37,
        _ => DEFAULT_CHAPTER_COUNT,
    }
}

const COMMON_CHAPTERS: [&str; 37] = [
    "Revelation",
    "Faith",
    "Knowledge",
    "Ablution",
    "Prayer",
    "Prayer Times",
    "Call to Prayer",
    "Friday Prayer",
    "Fear Prayer",
    "Eid Prayer",
    "Witr Prayer",
    "Seeking Rain",
    "Eclipse",
    "Prostration",
    "Shortening Prayer",
    "Funerals",
    "Zakat",
    "Hajj",
    "Umrah",
    "Fasting",
    "Night Prayer",
    "Virtues of Prayer",
    "Mosques",
    "Marriage",
    "Divorce",
    "Expenditures",
    "Food",
    "Sacrifice",
    "Drinks",
    "Medicine",
    "Dress",
    "Good Manners",
    "Asking Permission",
    "Invocations",
    "Hunting",
    "Slaughtering",
    "Al-Adha Festival",
];

/// Title for a 1-based chapter number
pub fn chapter_title(chapter: u32) -> String {
    chapter
        .checked_sub(1)
        .and_then(|idx| COMMON_CHAPTERS.get(idx as usize))
        .map(|title| title.to_string())
        .unwrap_or_else(|| format!("Chapter {}", chapter))
}

/// Study categories and the terms that select hadiths for them
pub const CATEGORIES: [(&str, &[&str]); 6] = [
    ("faith", &["faith", "belief", "iman", "tawhid"]),
    ("worship", &["prayer", "salah", "worship", "dhikr"]),
    ("character", &["character", "manners", "akhlaq", "ethics"]),
    ("law", &["law", "fiqh", "ruling", "jurisprudence"]),
    ("prophetic", &["prophet", "guidance", "sunnah"]),
    ("social", &["family", "social", "community", "marriage"]),
];

/// Search terms for a category; unknown categories search for their own name
pub fn category_terms(category: &str) -> Vec<String> {
    let key = category.trim().to_lowercase();
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, terms)| terms.iter().map(|t| t.to_string()).collect())
        .unwrap_or_else(|| vec![key])
}

/// Hadith returned when no random hadith can be fetched
pub fn fallback_hadith() -> HadithRecord {
    HadithRecord {
        id: "fallback-1".to_string(),
        primary_text: "The Prophet (\u{fdfa}) said, \"The deeds are considered by the intentions, and a person will get the reward according to his intention.\"".to_string(),
        primary_text_arabic: "إنَّمَا الْأَعْمَالُ بِالنِّيَّاتِ، وَإِنَّمَا لِكُلِّ امْرِئٍ مَا نَوَى".to_string(),
        narrator: "Umar ibn al-Khattab".to_string(),
        collection_id: "Sahih al-Bukhari".to_string(),
        book_label: "Book of Revelation".to_string(),
        chapter_label: "How the Divine Inspiration started".to_string(),
        hadith_number: "1".to_string(),
        grade: Grade::Sahih,
        reference: "Bukhari 1:1".to_string(),
        explanation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_collection() {
        assert_eq!(find_collection("Bukhari").unwrap().name, "Sahih al-Bukhari");
        assert!(find_collection("malik").is_none());
    }

    #[test]
    fn test_chapter_tables() {
        assert_eq!(chapter_count("bukhari"), 97);
        assert_eq!(chapter_count("unknown"), 50);
        assert_eq!(chapter_title(1), "Revelation");
        assert_eq!(chapter_title(37), "Al-Adha Festival");
        assert_eq!(chapter_title(38), "Chapter 38");
        assert_eq!(chapter_title(0), "Chapter 0");
    }

    #[test]
    fn test_category_terms() {
        assert_eq!(category_terms("Worship"), vec!["prayer", "salah", "worship", "dhikr"]);
        assert_eq!(category_terms("patience"), vec!["patience"]);
        assert_eq!(category_terms("  Patience "), vec!["patience"]);
    }

    #[test]
    fn test_fallback_hadith() {
        let record = fallback_hadith();
        assert_eq!(record.id, "fallback-1");
        assert_eq!(record.grade, Grade::Sahih);
        assert_eq!(record.reference, "Bukhari 1:1");
    }
}
