//! Chapter estimation, pagination and reference resolution.
//!
//! Upstream does not expose chapter boundaries, so collections are browsed
//! as fixed-size estimated chapters over the scanned hadith list.

use crate::catalog::{self, HadithCollectionMeta};
use crate::error::{Error, Result};
use crate::models::HadithRecord;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterSummary {
    pub number: u32,
    pub title: String,
    pub estimated_hadiths: u32,
}

/// Estimated chapter list for a collection
pub fn chapters(meta: &HadithCollectionMeta) -> Vec<ChapterSummary> {
    let count = catalog::chapter_count(meta.id);
    let per_chapter = meta.total_hadiths / count.max(1);

    (1..=count)
        .map(|number| ChapterSummary {
            number,
            title: catalog::chapter_title(number),
            estimated_hadiths: per_chapter,
        })
        .collect()
}

/// A page of hadiths within one chapter
#[derive(Debug, Clone, Serialize)]
pub struct ChapterPage {
    pub collection_id: String,
    pub chapter: u32,
    pub chapter_title: String,
    pub page: u32,
    pub total_pages: u32,
    pub hadiths: Vec<HadithRecord>,
}

/// Slice `records` into chapter `chapter` (1-based, `chapter_size` wide),
/// then into page `page` (1-based, `page_size` wide).
pub fn chapter_page(
    collection_id: &str,
    records: &[HadithRecord],
    chapter: u32,
    page: u32,
    chapter_size: usize,
    page_size: usize,
) -> ChapterPage {
    let chapter = chapter.max(1);
    let page = page.max(1);
    let chapter_size = chapter_size.max(1);
    let page_size = page_size.max(1);

    let in_chapter = window(records, (chapter as usize - 1).saturating_mul(chapter_size), chapter_size);
    let hadiths = window(in_chapter, (page as usize - 1).saturating_mul(page_size), page_size).to_vec();
    let total_pages = in_chapter.len().div_ceil(page_size) as u32;

    ChapterPage {
        collection_id: collection_id.to_string(),
        chapter,
        chapter_title: catalog::chapter_title(chapter),
        page,
        total_pages,
        hadiths,
    }
}

fn window<T>(items: &[T], start: usize, len: usize) -> &[T] {
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(len).min(items.len());
    &items[start..end]
}

/// Where a `collection:number` reference points
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceTarget {
    pub collection_id: String,
    pub chapter: u32,
    pub hadith_number: String,
}

impl ReferenceTarget {
    /// Id usable with `get_by_id`
    pub fn hadith_id(&self) -> String {
        HadithRecord::derive_id(&self.collection_id, &self.hadith_number)
    }
}

/// Resolve a reference like `bukhari:3984` to its estimated chapter
/// (`max(1, number / 100)`).
pub fn resolve_reference(reference: &str) -> Result<ReferenceTarget> {
    let (collection, number) = reference
        .split_once(':')
        .ok_or_else(|| Error::InvalidReference(format!("expected collection:number, got '{}'", reference)))?;

    let meta = catalog::find_collection(collection)
        .ok_or_else(|| Error::InvalidReference(format!("unknown collection '{}'", collection.trim())))?;

    let number = number.trim();
    let parsed: u64 = number
        .parse()
        .map_err(|_| Error::InvalidReference(format!("'{}' is not a hadith number", number)))?;

    let chapter = u32::try_from(parsed / 100).unwrap_or(u32::MAX).max(1);

    Ok(ReferenceTarget {
        collection_id: meta.id.to_string(),
        chapter,
        hadith_number: number.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_collection;
    use crate::models::Grade;

    fn records(n: usize) -> Vec<HadithRecord> {
        (1..=n)
            .map(|i| HadithRecord {
                id: format!("bukhari-{}", i),
                primary_text: "t".to_string(),
                primary_text_arabic: "ن".to_string(),
                narrator: "Various".to_string(),
                collection_id: "bukhari".to_string(),
                book_label: "Book 1".to_string(),
                chapter_label: "Section 1".to_string(),
                hadith_number: i.to_string(),
                grade: Grade::Unknown,
                reference: format!("bukhari {}", i),
                explanation: None,
            })
            .collect()
    }

    #[test]
    fn test_chapters_estimate() {
        let meta = find_collection("muslim").unwrap();
        let list = chapters(meta);
        assert_eq!(list.len(), 56);
        assert_eq!(list[0].title, "Revelation");
        assert_eq!(list[0].estimated_hadiths, 7190 / 56);
        assert_eq!(list[55].title, "Chapter 56");
    }

    #[test]
    fn test_chapter_page_slices() {
        let all = records(45);
        let page = chapter_page("bukhari", &all, 1, 2, 50, 10);
        assert_eq!(page.total_pages, 5);
        assert_eq!(page.hadiths.len(), 10);
        assert_eq!(page.hadiths[0].id, "bukhari-11");

        let last = chapter_page("bukhari", &all, 1, 5, 50, 10);
        assert_eq!(last.hadiths.len(), 5);
    }

    #[test]
    fn test_chapter_page_out_of_range() {
        let all = records(45);
        let page = chapter_page("bukhari", &all, 2, 1, 50, 10);
        assert!(page.hadiths.is_empty());
        assert_eq!(page.total_pages, 0);

        let page = chapter_page("bukhari", &all, 1, 9, 50, 10);
        assert!(page.hadiths.is_empty());
        assert_eq!(page.total_pages, 5);
    }

    #[test]
    fn test_resolve_reference() {
        let target = resolve_reference("Bukhari:3984").unwrap();
        assert_eq!(target.collection_id, "bukhari");
        assert_eq!(target.chapter, 39);
        assert_eq!(target.hadith_id(), "bukhari-3984");

        assert_eq!(resolve_reference("muslim:42").unwrap().chapter, 1);
    }

    #[test]
    fn test_resolve_reference_rejects_bad_input() {
        for reference in ["bukhari", "malik:1", "bukhari:abc", "bukhari:"] {
            assert!(
                matches!(resolve_reference(reference), Err(Error::InvalidReference(_))),
                "reference {:?}",
                reference
            );
        }
    }
}
