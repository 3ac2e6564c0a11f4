//! Random and by-id lookups

use crate::error::{Error, Result};
use crate::models::{GradeTone, HadithRecord};
use crate::retrieval::HadithRetrievalService;
use crate::upstream::HadithSource;

pub async fn cmd_random<S: HadithSource>(service: &HadithRetrievalService<S>) -> HadithRecord {
    service.random().await
}

pub async fn cmd_get<S: HadithSource>(
    service: &HadithRetrievalService<S>,
    id: &str,
) -> Result<HadithRecord> {
    service
        .get_by_id(id)
        .await
        .ok_or_else(|| Error::NotFound(id.to_string()))
}

fn tone_marker(tone: GradeTone) -> &'static str {
    match tone {
        GradeTone::Green => "🟢",
        GradeTone::Yellow => "🟡",
        GradeTone::Red => "🔴",
        GradeTone::Gray => "⚪",
    }
}

/// Print a single hadith in full
pub fn print_hadith(record: &HadithRecord) {
    println!();
    println!("{}", record.primary_text_arabic);
    println!();
    println!("{}", record.primary_text);
    println!();
    println!("  Narrator:   {}", record.narrator);
    println!("  Reference:  {}", record.reference);
    println!("  Collection: {}", record.collection_id);
    println!("  Book:       {}", record.book_label);
    println!("  Chapter:    {}", record.chapter_label);
    println!(
        "  Grade:      {} {}",
        tone_marker(record.grade.tone()),
        record.grade
    );
    if let Some(explanation) = &record.explanation {
        println!("\n  {}", explanation);
    }
    println!("  Id:         {}", record.id);
}
