//! Search and category commands

use crate::error::Result;
use crate::models::{Grade, HadithRecord, SearchFilters};
use crate::retrieval::HadithRetrievalService;
use crate::upstream::HadithSource;
use serde::Serialize;
use unicode_segmentation::UnicodeSegmentation;

/// Search options as given on the command line
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub collection: Option<String>,
    pub grades: Vec<String>,
    pub narrators: Vec<String>,
}

impl SearchOptions {
    pub fn into_filters(self) -> Result<SearchFilters> {
        let grades = self
            .grades
            .iter()
            .map(|g| g.parse::<Grade>())
            .collect::<Result<_>>()?;

        Ok(SearchFilters {
            collection_id: self.collection.map(|c| c.trim().to_lowercase()),
            grades,
            narrators: self.narrators.into_iter().collect(),
        })
    }
}

/// Search result for CLI display
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    pub query: String,
    pub results: Vec<HadithRecord>,
}

pub async fn cmd_search<S: HadithSource>(
    service: &HadithRetrievalService<S>,
    query: &str,
    options: SearchOptions,
) -> Result<SearchReport> {
    let filters = options.into_filters()?;
    let results = service.search(query, &filters).await;
    Ok(SearchReport {
        query: query.to_string(),
        results,
    })
}

pub async fn cmd_category<S: HadithSource>(
    service: &HadithRetrievalService<S>,
    category: &str,
    collection: Option<&str>,
) -> SearchReport {
    let results = service.search_category(category, collection).await;
    SearchReport {
        query: format!("category:{}", category),
        results,
    }
}

/// Print search results to console
pub fn print_search_results(report: &SearchReport) {
    println!("\n🔍 Query: {}\n", report.query);
    println!("Found {} results:\n", report.results.len());

    for (i, record) in report.results.iter().enumerate() {
        println!(
            "{}. [{}] {} - {}",
            i + 1,
            record.grade,
            record.reference,
            record.narrator
        );
        println!("   {}\n", preview(&record.primary_text, 200));
    }
}

/// First `max` graphemes of `text` on one line
pub(crate) fn preview(text: &str, max: usize) -> String {
    let flat = text.trim().replace('\n', " ");
    if flat.graphemes(true).count() <= max {
        return flat;
    }
    let cut: String = flat.graphemes(true).take(max).collect();
    format!("{}...", cut.trim_end())
}
