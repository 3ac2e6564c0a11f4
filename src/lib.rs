//! hadith-reader - browse, search and study hadith collections
//!
//! This crate provides:
//! - A retrieval service over the public static hadith JSON CDN (search,
//!   random and by-id lookups) that tolerates unreliable upstream data
//! - Normalization of inconsistent upstream payloads into [`HadithRecord`]s
//! - Chapter browsing, reference resolution and study-category search
//! - A text-to-speech client and the `hadith` CLI

pub mod browse;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod retrieval;
pub mod speech;
pub mod upstream;

pub use config::Config;
pub use error::{Error, Result};
pub use models::{Grade, HadithRecord, SearchFilters};
pub use retrieval::HadithRetrievalService;
