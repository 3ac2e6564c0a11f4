//! Hadith retrieval service
//!
//! Resolves search, random and by-id requests against a [`HadithSource`].
//! Individual fetch failures are logged and treated as "no data from this
//! source"; no operation here returns an upstream error to the caller.
//!
//! Each section is fetched in both languages concurrently, and sections are
//! scanned one after another, so at most two requests are in flight.

use crate::browse::{self, ChapterPage, ChapterSummary};
use crate::catalog::{self, HadithCollectionMeta};
use crate::config::{BrowseConfig, Config, RandomConfig, SearchConfig};
use crate::error::{Error, Result};
use crate::models::{HadithRecord, SearchFilters};
use crate::normalize::{align, normalize_aligned, normalize_point, AlignedEntry};
use crate::upstream::{
    decode_point, decode_section, edition_id, HadithSource, HttpSource, Language, RawHadith,
};
use futures::future;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::Value;
use std::sync::Mutex;
use tracing::{debug, info, warn};

/// Number of sample hadiths shown in a collection overview
const OVERVIEW_SAMPLES: usize = 6;

/// Text filter applied while scanning.
///
/// An entry matches when there are no terms, or when any term appears in
/// the English text or narrator (case-insensitive) or verbatim in the
/// Arabic text. Terms are matched as given, surrounding whitespace
/// included; only zero-length terms are dropped.
#[derive(Debug, Clone, Default)]
pub struct QueryMatcher {
    terms: Vec<(String, String)>,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        Self::any_of([query])
    }

    pub fn any_of<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .filter(|t| !t.is_empty())
            .map(|t| {
                let lower = t.to_lowercase();
                (t, lower)
            })
            .collect();
        Self { terms }
    }

    pub fn matches(&self, entry: &AlignedEntry<'_>) -> bool {
        if self.terms.is_empty() {
            return true;
        }

        let english = entry.english_text().map(str::to_lowercase);
        let narrator = entry.narrator().map(str::to_lowercase);
        let arabic = entry.arabic_text();

        self.terms.iter().any(|(term, lower)| {
            english.as_deref().is_some_and(|t| t.contains(lower.as_str()))
                || narrator.as_deref().is_some_and(|n| n.contains(lower.as_str()))
                || arabic.is_some_and(|a| a.contains(term.as_str()))
        })
    }
}

/// Both language editions of one section, already decoded
#[derive(Debug, Default)]
struct SectionPair {
    english: Vec<RawHadith>,
    arabic: Vec<RawHadith>,
}

impl SectionPair {
    fn len(&self) -> usize {
        self.english.len().max(self.arabic.len())
    }
}

/// Collection metadata with its chapters and a few sample hadiths
#[derive(Debug, Clone, Serialize)]
pub struct CollectionOverview {
    pub collection: HadithCollectionMeta,
    pub chapters: Vec<ChapterSummary>,
    pub samples: Vec<HadithRecord>,
}

/// Retrieval service over a hadith source
pub struct HadithRetrievalService<S> {
    source: S,
    search: SearchConfig,
    random: RandomConfig,
    browse: BrowseConfig,
    rng: Mutex<StdRng>,
}

impl HadithRetrievalService<HttpSource> {
    /// Build a service that talks to the configured CDN
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpSource::new(&config.api)?;
        Ok(Self::new(source, config))
    }
}

impl<S: HadithSource> HadithRetrievalService<S> {
    pub fn new(source: S, config: &Config) -> Self {
        let rng = match config.random.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            source,
            search: config.search.clone(),
            random: config.random.clone(),
            browse: config.browse.clone(),
            rng: Mutex::new(rng),
        }
    }

    /// Search by text with optional collection, grade and narrator filters.
    ///
    /// Grade and narrator filters are applied after the scan and do not
    /// reduce the number of upstream fetches.
    pub async fn search(&self, query: &str, filters: &SearchFilters) -> Vec<HadithRecord> {
        info!("Searching: {:?}", query);
        let matcher = QueryMatcher::new(query);
        self.filtered_scan(&matcher, filters).await
    }

    /// Search for hadiths matching any of a study category's terms
    pub async fn search_category(
        &self,
        category: &str,
        collection_id: Option<&str>,
    ) -> Vec<HadithRecord> {
        let terms = catalog::category_terms(category);
        info!("Searching category '{}' with terms {:?}", category, terms);

        let filters = SearchFilters {
            collection_id: collection_id.map(str::to_string),
            ..Default::default()
        };
        self.filtered_scan(&QueryMatcher::any_of(&terms), &filters).await
    }

    async fn filtered_scan(
        &self,
        matcher: &QueryMatcher,
        filters: &SearchFilters,
    ) -> Vec<HadithRecord> {
        let collections = match &filters.collection_id {
            Some(id) => vec![id.clone()],
            None => self.search.default_collections.clone(),
        };

        let mut results = self
            .scan(&collections, matcher, self.search.result_cap)
            .await;

        let before = results.len();
        results.retain(|record| filters.accepts(record));
        if results.len() != before {
            debug!("Post-filter kept {} of {} results", results.len(), before);
        }

        results.truncate(self.search.result_cap);
        info!("Returning {} search results", results.len());
        results
    }

    /// Scan sections of each collection in order, stopping once `cap`
    /// matches have been collected.
    async fn scan(
        &self,
        collections: &[String],
        matcher: &QueryMatcher,
        cap: usize,
    ) -> Vec<HadithRecord> {
        let mut results = Vec::new();
        if cap == 0 {
            return results;
        }

        'collections: for collection_id in collections {
            for section in 1..=self.search.max_sections {
                let pair = self.fetch_section_pair(collection_id, section).await;

                for (index, entry) in align(&pair.english, &pair.arabic).iter().enumerate() {
                    if !matcher.matches(entry) {
                        continue;
                    }
                    results.push(normalize_aligned(entry, collection_id, section, index));
                    if results.len() >= cap {
                        debug!(
                            "Result cap {} reached in {} section {}",
                            cap, collection_id, section
                        );
                        break 'collections;
                    }
                }
            }
        }

        results
    }

    /// Fetch a section in English and Arabic concurrently. Each side
    /// settles independently; a failed side contributes no entries.
    async fn fetch_section_pair(&self, collection_id: &str, section: u32) -> SectionPair {
        let english_edition = edition_id(Language::English, collection_id);
        let arabic_edition = edition_id(Language::Arabic, collection_id);

        let (english, arabic) = future::join(
            self.source.fetch_section(&english_edition, section),
            self.source.fetch_section(&arabic_edition, section),
        )
        .await;

        SectionPair {
            english: settle_section(english, &english_edition, section),
            arabic: settle_section(arabic, &arabic_edition, section),
        }
    }

    /// A random hadith from the configured pool.
    ///
    /// Always returns a record: the fixed fallback hadith when nothing
    /// could be fetched.
    pub async fn random(&self) -> HadithRecord {
        let Some((collection_id, section)) = self.pick_collection_and_section() else {
            warn!("Random collection pool is empty, using fallback hadith");
            return catalog::fallback_hadith();
        };

        info!(
            "Getting random hadith from {}, section {}",
            collection_id, section
        );

        let pair = self.fetch_section_pair(&collection_id, section).await;
        let len = pair.len();
        if len == 0 {
            warn!(
                "No hadiths found in {} section {}, using fallback hadith",
                collection_id, section
            );
            return catalog::fallback_hadith();
        }

        let index = self.with_rng(|rng| rng.gen_range(0..len));
        let entries = align(&pair.english, &pair.arabic);
        normalize_aligned(&entries[index], &collection_id, section, index)
    }

    fn pick_collection_and_section(&self) -> Option<(String, u32)> {
        if self.random.collections.is_empty() {
            return None;
        }
        let max_section = self.random.max_section.max(1);
        Some(self.with_rng(|rng| {
            let collection = &self.random.collections[rng.gen_range(0..self.random.collections.len())];
            (collection.clone(), rng.gen_range(1..=max_section))
        }))
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut rng)
    }

    /// Look up `{collection_id}-{hadith_number}`.
    ///
    /// Returns `None` for malformed ids, failed fetches, and payloads
    /// without a hadith number. A returned record's id equals `id`.
    pub async fn get_by_id(&self, id: &str) -> Option<HadithRecord> {
        let (collection_id, hadith_number) = match id.split_once('-') {
            Some((c, n)) if !c.is_empty() && !n.is_empty() => (c, n),
            _ => {
                debug!("Malformed hadith id: {:?}", id);
                return None;
            }
        };

        let edition = edition_id(Language::English, collection_id);
        let value = match self.source.fetch_hadith(&edition, hadith_number).await {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to fetch {} {}: {}", edition, hadith_number, e);
                return None;
            }
        };

        match decode_point(value) {
            Some(raw) => Some(normalize_point(&raw, collection_id, hadith_number)),
            None => {
                debug!("No hadith number in response for {}", id);
                None
            }
        }
    }

    /// Raw upstream edition listing; an empty object when unavailable
    pub async fn editions(&self) -> Value {
        match self.source.fetch_editions().await {
            Ok(value) => value,
            Err(e) => {
                warn!("Failed to fetch editions: {}", e);
                Value::Object(Default::default())
            }
        }
    }

    /// One page of an estimated chapter of a collection
    pub async fn browse_chapter(&self, collection_id: &str, chapter: u32, page: u32) -> ChapterPage {
        let collection_id = catalog::find_collection(collection_id)
            .map(|meta| meta.id.to_string())
            .unwrap_or_else(|| collection_id.trim().to_lowercase());
        let chapter = chapter.max(1);
        let cap = (chapter as usize).saturating_mul(self.browse.chapter_size);
        let records = self
            .scan(&[collection_id.clone()], &QueryMatcher::default(), cap)
            .await;

        browse::chapter_page(
            &collection_id,
            &records,
            chapter,
            page,
            self.browse.chapter_size,
            self.browse.page_size,
        )
    }

    /// Metadata, chapter list and sample hadiths for a known collection
    pub async fn collection_overview(&self, collection_id: &str) -> Result<CollectionOverview> {
        let meta = catalog::find_collection(collection_id)
            .ok_or_else(|| Error::UnknownCollection(collection_id.to_string()))?;

        let mut samples = self
            .search("", &SearchFilters::for_collection(meta.id))
            .await;
        samples.truncate(OVERVIEW_SAMPLES);

        Ok(CollectionOverview {
            collection: *meta,
            chapters: browse::chapters(meta),
            samples,
        })
    }
}

fn settle_section(result: Result<Value>, edition: &str, section: u32) -> Vec<RawHadith> {
    match result {
        Ok(value) => {
            let entries = decode_section(value);
            debug!("{} section {}: {} entries", edition, section, entries.len());
            entries
        }
        Err(e) => {
            warn!("Failed to fetch {} section {}: {}", edition, section, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Grade;
    use crate::normalize::ARABIC_PLACEHOLDER;
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// In-memory source keyed by (edition, section); missing keys fail.
    #[derive(Default)]
    struct FakeSource {
        sections: HashMap<(String, u32), Value>,
        points: HashMap<(String, String), Value>,
        calls: AtomicUsize,
    }

    impl FakeSource {
        fn with_section(mut self, edition: &str, section: u32, value: Value) -> Self {
            self.sections.insert((edition.to_string(), section), value);
            self
        }

        fn with_point(mut self, edition: &str, number: &str, value: Value) -> Self {
            self.points
                .insert((edition.to_string(), number.to_string()), value);
            self
        }
    }

    #[async_trait]
    impl HadithSource for FakeSource {
        async fn fetch_section(&self, edition: &str, section: u32) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.sections
                .get(&(edition.to_string(), section))
                .cloned()
                .ok_or_else(|| Error::Upstream(format!("HTTP 404: {}/{}", edition, section)))
        }

        async fn fetch_hadith(&self, edition: &str, hadith_number: &str) -> Result<Value> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.points
                .get(&(edition.to_string(), hadith_number.to_string()))
                .cloned()
                .ok_or_else(|| Error::Upstream("HTTP 404".to_string()))
        }

        async fn fetch_editions(&self) -> Result<Value> {
            Err(Error::Upstream("HTTP 503".to_string()))
        }
    }

    fn entry(number: u32, text: &str, grade: &str, narrator: &str) -> Value {
        json!({
            "hadithnumber": number,
            "text": text,
            "narrator": narrator,
            "grades": [{"grade": grade, "grader": "test"}]
        })
    }

    fn service(source: FakeSource) -> HadithRetrievalService<FakeSource> {
        let mut config = Config::default();
        config.random.seed = Some(42);
        HadithRetrievalService::new(source, &config)
    }

    fn sample_source() -> FakeSource {
        FakeSource::default()
            .with_section(
                "eng-bukhari",
                1,
                json!({"hadiths": [
                    entry(1, "Actions are judged by intentions", "Sahih", "Umar"),
                    entry(2, "The strong believer is better", "Hasan", "Abu Hurairah"),
                ]}),
            )
            .with_section(
                "ara-bukhari",
                1,
                json!({"hadiths": [
                    {"hadithnumber": 1, "text": "إنما الأعمال بالنيات"},
                    {"hadithnumber": 2, "text": "المؤمن القوي"},
                ]}),
            )
            .with_section(
                "eng-muslim",
                1,
                json!([entry(10, "Purity is half of faith", "Daif", "Abu Malik")]),
            )
    }

    #[tokio::test]
    async fn test_empty_query_uses_default_collections() {
        let results = service(sample_source())
            .search("", &SearchFilters::default())
            .await;

        let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["bukhari-1", "bukhari-2", "muslim-10"]);
        assert!(results
            .iter()
            .all(|r| r.collection_id == "bukhari" || r.collection_id == "muslim"));
        assert_eq!(results[2].primary_text_arabic, ARABIC_PLACEHOLDER);
    }

    #[tokio::test]
    async fn test_query_matches_english_narrator_and_arabic() {
        let svc = service(sample_source());
        let filters = SearchFilters::default();

        let ids = |records: Vec<HadithRecord>| -> Vec<String> {
            records.into_iter().map(|r| r.id).collect()
        };

        assert_eq!(ids(svc.search("INTENTIONS", &filters).await), vec!["bukhari-1"]);
        assert_eq!(ids(svc.search("hurairah", &filters).await), vec!["bukhari-2"]);
        assert_eq!(ids(svc.search("القوي", &filters).await), vec!["bukhari-2"]);
        assert!(svc.search("zakat", &filters).await.is_empty());
    }

    #[tokio::test]
    async fn test_query_whitespace_is_significant() {
        let svc = service(sample_source());
        let filters = SearchFilters::default();

        // "Purity is half of faith" has no trailing space
        assert!(svc.search(" faith ", &filters).await.is_empty());
        assert!(svc.search("  ", &filters).await.is_empty());

        let results = svc.search("half of ", &filters).await;
        assert_eq!(results.len(), 1);
        assert!(results[0].primary_text.contains("half of "));
    }

    #[tokio::test]
    async fn test_query_results_are_subset_of_unfiltered() {
        let svc = service(sample_source());
        let all = svc.search("", &SearchFilters::default()).await;
        let matched = svc.search("faith", &SearchFilters::default()).await;
        assert!(!matched.is_empty());
        assert!(matched.iter().all(|r| all.contains(r)));
    }

    #[tokio::test]
    async fn test_grade_filter_is_post_filter() {
        let source = sample_source();
        let svc = service(source);

        let mut filters = SearchFilters::default();
        filters.grades.insert(Grade::Sahih);
        let results = svc.search("", &filters).await;
        assert_eq!(results.len(), 1);
        assert!(results.iter().all(|r| r.grade == Grade::Sahih));

        // 10 sections x 2 languages x 2 collections, regardless of the filter
        assert_eq!(svc.source.calls.load(Ordering::SeqCst), 40);
    }

    #[tokio::test]
    async fn test_narrator_filter() {
        let mut filters = SearchFilters::for_collection("bukhari");
        filters.narrators.insert("umar".to_string());
        let results = service(sample_source()).search("", &filters).await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "bukhari-1");
    }

    #[tokio::test]
    async fn test_result_cap_stops_fetching() {
        let many: Vec<Value> = (1..=30)
            .map(|n| entry(n, "text", "Sahih", "Various"))
            .collect();
        let source = FakeSource::default()
            .with_section("eng-bukhari", 1, json!({"hadiths": many.clone()}))
            .with_section("eng-bukhari", 2, json!({"hadiths": many}));

        let svc = service(source);
        let results = svc.search("", &SearchFilters::default()).await;
        assert_eq!(results.len(), 50);
        // Two sections of bukhari only; muslim is never touched
        assert_eq!(svc.source.calls.load(Ordering::SeqCst), 4);
    }

    #[tokio::test]
    async fn test_every_fetch_failing_yields_empty() {
        let svc = service(FakeSource::default());
        let results = svc
            .search("", &SearchFilters::for_collection("bukhari"))
            .await;
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_search_category_matches_any_term() {
        let results = service(sample_source())
            .search_category("faith", None)
            .await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "muslim-10");
    }

    #[tokio::test]
    async fn test_random_falls_back_when_upstream_fails() {
        let record = service(FakeSource::default()).random().await;
        assert_eq!(record, catalog::fallback_hadith());
        assert_eq!(record.id, "fallback-1");
        assert_eq!(record.grade, Grade::Sahih);
        assert_eq!(record.reference, "Bukhari 1:1");
    }

    #[tokio::test]
    async fn test_random_picks_from_fetched_section() {
        let mut source = FakeSource::default();
        for collection in ["bukhari", "muslim", "abudawud"] {
            for section in 1..=20 {
                source = source.with_section(
                    &format!("eng-{}", collection),
                    section,
                    json!({"hadiths": [entry(section, "text", "Hasan", "Anas")]}),
                );
            }
        }

        let record = service(source).random().await;
        assert_ne!(record.id, "fallback-1");
        assert_eq!(record.grade, Grade::Hasan);
        assert_eq!(record.narrator, "Anas");
        assert_eq!(record.id, format!("{}-{}", record.collection_id, record.hadith_number));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let source = FakeSource::default().with_point(
            "eng-bukhari",
            "7",
            json!({"hadiths": [{"hadithnumber": 7, "text": "seven", "grades": [{"grade": "Sahih"}]}]}),
        );
        let svc = service(source);

        let record = svc.get_by_id("bukhari-7").await.unwrap();
        assert_eq!(record.id, "bukhari-7");
        assert_eq!(record.grade, Grade::Sahih);
        assert_eq!(record.primary_text, "seven");

        assert!(svc.get_by_id("bukhari-8").await.is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_malformed() {
        let svc = service(FakeSource::default());
        for id in ["bukhari", "-7", "bukhari-", ""] {
            assert!(svc.get_by_id(id).await.is_none(), "id {:?}", id);
        }
        assert_eq!(svc.source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_get_by_id_without_number_is_not_found() {
        let source =
            FakeSource::default().with_point("eng-bukhari", "3", json!({"text": "no number"}));
        assert!(service(source).get_by_id("bukhari-3").await.is_none());
    }

    #[tokio::test]
    async fn test_editions_failure_is_empty_object() {
        let value = service(FakeSource::default()).editions().await;
        assert_eq!(value, json!({}));
    }

    #[tokio::test]
    async fn test_browse_chapter_pages() {
        let many: Vec<Value> = (1..=60)
            .map(|n| entry(n, "text", "Sahih", "Various"))
            .collect();
        let source =
            FakeSource::default().with_section("eng-bukhari", 1, json!({"hadiths": many}));

        let page = service(source).browse_chapter("bukhari", 2, 1).await;
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.hadiths.len(), 10);
        assert_eq!(page.hadiths[0].id, "bukhari-51");
    }

    #[tokio::test]
    async fn test_browse_chapter_normalizes_collection_id() {
        let page = service(sample_source()).browse_chapter(" Bukhari ", 1, 1).await;
        assert_eq!(page.collection_id, "bukhari");
        assert_eq!(page.hadiths.len(), 2);
        assert_eq!(page.hadiths[0].id, "bukhari-1");

        let page = service(sample_source()).browse_chapter("MUSLIM", 1, 1).await;
        assert_eq!(page.hadiths[0].id, "muslim-10");
    }

    #[tokio::test]
    async fn test_collection_overview() {
        let svc = service(sample_source());
        let overview = svc.collection_overview("Bukhari").await.unwrap();
        assert_eq!(overview.collection.id, "bukhari");
        assert_eq!(overview.chapters.len(), 97);
        assert_eq!(overview.samples.len(), 2);

        assert!(matches!(
            svc.collection_overview("malik").await,
            Err(Error::UnknownCollection(_))
        ));
    }

    #[tokio::test]
    async fn test_http_500_everywhere_yields_empty_search() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let mut config = Config::default();
        config.api.base_url = mock_server.uri();
        config.api.timeout_secs = 5;
        let svc = HadithRetrievalService::from_config(&config).unwrap();

        let results = svc
            .search("", &SearchFilters::for_collection("bukhari"))
            .await;
        assert!(results.is_empty());

        let record = svc.random().await;
        assert_eq!(record.id, "fallback-1");

        let requests = mock_server.received_requests().await.unwrap_or_default();
        assert_eq!(requests.len(), 22);
    }

    #[tokio::test]
    async fn test_http_partial_language_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(wiremock::matchers::path("/editions/eng-bukhari/sections/1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hadiths": [
                    {"hadithnumber": 1, "text": "one"},
                    {"hadithnumber": 2, "text": "two"},
                    {"hadithnumber": 3, "text": "three"}
                ]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(wiremock::matchers::path("/editions/ara-bukhari/sections/1.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hadiths": [{"hadithnumber": 1, "text": "واحد"}]
            })))
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let mut config = Config::default();
        config.api.base_url = mock_server.uri();
        let svc = HadithRetrievalService::from_config(&config).unwrap();

        let results = svc
            .search("", &SearchFilters::for_collection("bukhari"))
            .await;
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].primary_text_arabic, "واحد");
        assert_eq!(results[1].primary_text_arabic, ARABIC_PLACEHOLDER);
        assert_eq!(results[2].primary_text_arabic, ARABIC_PLACEHOLDER);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let first = tokio_test::block_on(service(FakeSource::default()).random());
        let second = tokio_test::block_on(service(FakeSource::default()).random());
        assert_eq!(first, second);
        assert_eq!(
            service(FakeSource::default()).pick_collection_and_section(),
            service(FakeSource::default()).pick_collection_and_section()
        );
    }
}
