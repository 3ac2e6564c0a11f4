//! Default values for configuration

/// Default hadith CDN root, overridable through `HADITH_API_BASE_URL`
pub fn default_api_base_url() -> String {
    std::env::var("HADITH_API_BASE_URL")
        .unwrap_or_else(|_| "https://cdn.jsdelivr.net/gh/fawazahmed0/hadith-api@1".to_string())
}

/// Default request timeout in seconds
pub fn default_api_timeout() -> u64 {
    30
}

/// Default user agent
pub fn default_api_user_agent() -> String {
    format!("hadith-reader/{}", env!("CARGO_PKG_VERSION"))
}

/// Collections scanned when a search names none
pub fn default_search_collections() -> Vec<String> {
    vec!["bukhari".to_string(), "muslim".to_string()]
}

/// Sections scanned per collection
pub fn default_search_max_sections() -> u32 {
    10
}

/// Global cap on search results
pub fn default_search_result_cap() -> usize {
    50
}

/// Pool the random hadith is drawn from
pub fn default_random_collections() -> Vec<String> {
    vec![
        "bukhari".to_string(),
        "muslim".to_string(),
        "abudawud".to_string(),
    ]
}

/// Highest section number sampled for a random hadith
pub fn default_random_max_section() -> u32 {
    20
}

/// Hadiths per estimated chapter
pub fn default_browse_chapter_size() -> usize {
    50
}

/// Hadiths per page within a chapter
pub fn default_browse_page_size() -> usize {
    10
}

/// Default text-to-speech endpoint
pub fn default_speech_endpoint() -> String {
    "https://api.ttsopenai.com/uapi/v1/text-to-speech".to_string()
}

/// Environment variable holding the text-to-speech API key
pub fn default_speech_api_key_env() -> String {
    "TTS_OPENAI_KEY".to_string()
}

/// Default voice
pub fn default_speech_voice_id() -> String {
    "OA001".to_string()
}

/// Default speech model
pub fn default_speech_model() -> String {
    "tts-1".to_string()
}

/// Default playback speed
pub fn default_speech_speed() -> f32 {
    1.0
}

/// Longest text sent for synthesis, in characters
pub fn default_speech_max_chars() -> usize {
    10_000
}
