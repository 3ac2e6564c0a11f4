//! Upstream hadith CDN access
//!
//! This module provides:
//! - The [`HadithSource`] seam the retrieval service fetches through
//! - Edition naming (`eng-bukhari`, `ara-bukhari`, ...)
//! - Tolerant decoding of the inconsistent per-edition payload shapes
//! - A reqwest-backed [`HttpSource`]

mod client;
mod payload;

pub use client::*;
pub use payload::*;

use crate::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Language variant of an upstream edition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Arabic,
}

impl Language {
    pub fn prefix(self) -> &'static str {
        match self {
            Language::English => "eng",
            Language::Arabic => "ara",
        }
    }
}

/// Edition identifier for a collection in a language, e.g. `eng-bukhari`
pub fn edition_id(language: Language, collection_id: &str) -> String {
    format!("{}-{}", language.prefix(), collection_id)
}

/// Read-only access to the static hadith documents.
///
/// Implementations report transport and status failures as errors; the
/// retrieval service decides what a failure means for each operation.
#[async_trait]
pub trait HadithSource: Send + Sync {
    /// `editions/{edition}/sections/{section}.json`
    async fn fetch_section(&self, edition: &str, section: u32) -> Result<Value>;

    /// `editions/{edition}/{hadith_number}.json`
    async fn fetch_hadith(&self, edition: &str, hadith_number: &str) -> Result<Value>;

    /// `editions.json`
    async fn fetch_editions(&self) -> Result<Value>;
}
