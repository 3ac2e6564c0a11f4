//! Collection, chapter, reference and edition commands

use super::search::preview;
use crate::browse::{resolve_reference, ChapterPage, ReferenceTarget};
use crate::catalog::{HadithCollectionMeta, COLLECTIONS};
use crate::error::Result;
use crate::retrieval::{CollectionOverview, HadithRetrievalService};
use crate::upstream::HadithSource;
use serde_json::Value;

pub fn cmd_collections() -> Vec<HadithCollectionMeta> {
    COLLECTIONS.to_vec()
}

pub fn print_collections(collections: &[HadithCollectionMeta]) {
    println!("Collections:\n");
    for meta in collections {
        println!("  {} ({})", meta.name, meta.id);
        println!("    {}", meta.name_arabic);
        println!(
            "    {} hadiths, compiled by {} ({})",
            meta.total_hadiths, meta.compiler, meta.compilation_period
        );
        println!("    {}\n", meta.description);
    }
}

pub async fn cmd_collection<S: HadithSource>(
    service: &HadithRetrievalService<S>,
    collection_id: &str,
) -> Result<CollectionOverview> {
    service.collection_overview(collection_id).await
}

pub fn print_overview(overview: &CollectionOverview) {
    let meta = &overview.collection;
    println!("\n📚 {} ({})", meta.name, meta.name_arabic);
    println!("   {}", meta.description);
    println!(
        "   {} hadiths, compiled by {} ({})\n",
        meta.total_hadiths, meta.compiler, meta.compilation_period
    );

    println!("Chapters ({}):", overview.chapters.len());
    for chapter in &overview.chapters {
        println!(
            "  {:>3}. {} (~{} hadiths)",
            chapter.number, chapter.title, chapter.estimated_hadiths
        );
    }

    if !overview.samples.is_empty() {
        println!("\nRecent hadiths:");
        for record in &overview.samples {
            println!("  [{}] {}", record.reference, preview(&record.primary_text, 80));
        }
    }
}

pub async fn cmd_chapter<S: HadithSource>(
    service: &HadithRetrievalService<S>,
    collection_id: &str,
    chapter: u32,
    page: u32,
) -> ChapterPage {
    service.browse_chapter(collection_id, chapter, page).await
}

pub fn print_chapter_page(page: &ChapterPage) {
    println!(
        "\n{} - Chapter {}: {} (page {} of {})\n",
        page.collection_id,
        page.chapter,
        page.chapter_title,
        page.page,
        page.total_pages.max(1)
    );

    if page.hadiths.is_empty() {
        println!("No hadiths on this page.");
        return;
    }

    for record in &page.hadiths {
        println!("#{} [{}] {}", record.hadith_number, record.grade, record.narrator);
        println!("   {}\n", preview(&record.primary_text, 200));
    }
}

pub fn cmd_resolve(reference: &str) -> Result<ReferenceTarget> {
    resolve_reference(reference)
}

pub fn print_reference(target: &ReferenceTarget) {
    println!(
        "{} hadith {} is in chapter {} (id: {})",
        target.collection_id,
        target.hadith_number,
        target.chapter,
        target.hadith_id()
    );
}

pub async fn cmd_editions<S: HadithSource>(service: &HadithRetrievalService<S>) -> Value {
    service.editions().await
}

/// Print edition names, grouped by collection when the listing has that shape
pub fn print_editions(editions: &Value) {
    let Some(collections) = editions.as_object() else {
        println!("No editions available.");
        return;
    };
    if collections.is_empty() {
        println!("No editions available.");
        return;
    }

    for (collection, info) in collections {
        let name = info
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or(collection);
        println!("{} ({})", name, collection);

        if let Some(list) = info.get("collection").and_then(Value::as_array) {
            for edition in list {
                if let Some(edition_name) = edition.get("name").and_then(Value::as_str) {
                    let language = edition
                        .get("language")
                        .and_then(Value::as_str)
                        .unwrap_or("?");
                    println!("  {} [{}]", edition_name, language);
                }
            }
        }
    }
}
