//! Decoding of upstream edition documents.
//!
//! Section documents list their hadiths under `hadiths`, under
//! `collection`, or as a bare array depending on the edition. Entries
//! themselves vary: numbers arrive as numbers or strings, text may sit
//! under `text` or `hadith`, grades and references are optional.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One upstream hadith entry, every field optional.
///
/// Blank strings and zero numbers decode as `None` so callers can chain
/// fallbacks with `or`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawHadith {
    #[serde(default, deserialize_with = "lenient_number")]
    pub hadithnumber: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub arabicnumber: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub hadith: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub arab: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub arabic: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub narrator: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub chapter: Option<String>,
    #[serde(default, deserialize_with = "lenient_grades")]
    pub grades: Vec<RawGrade>,
    #[serde(default, deserialize_with = "lenient_reference")]
    pub reference: Option<RawReference>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawGrade {
    #[serde(default, deserialize_with = "lenient_text")]
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub grader: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawReference {
    #[serde(default, deserialize_with = "lenient_number")]
    pub book: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub hadith: Option<String>,
}

impl RawHadith {
    /// Decode one entry; anything that is not an object becomes an empty
    /// entry so it still holds its position in the section.
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    /// Main text in the edition's own language
    pub fn body(&self) -> Option<&str> {
        self.text.as_deref().or(self.hadith.as_deref())
    }

    /// Arabic text carried alongside a point payload
    pub fn arabic_body(&self) -> Option<&str> {
        self.arab.as_deref().or(self.arabic.as_deref())
    }

    /// Label of the first grading, if any
    pub fn first_grade(&self) -> Option<&str> {
        self.grades.first().and_then(|g| g.grade.as_deref())
    }

    pub fn book(&self) -> Option<&str> {
        self.reference.as_ref().and_then(|r| r.book.as_deref())
    }
}

/// Section document shapes, tried in order
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SectionPayload {
    Hadiths { hadiths: Vec<Value> },
    Collection { collection: Vec<Value> },
    Bare(Vec<Value>),
    Unrecognized(Value),
}

impl SectionPayload {
    fn into_entries(self) -> Vec<Value> {
        match self {
            SectionPayload::Hadiths { hadiths } => hadiths,
            SectionPayload::Collection { collection } => flatten_groups(collection),
            SectionPayload::Bare(entries) => entries,
            SectionPayload::Unrecognized(_) => Vec::new(),
        }
    }
}

/// Bulk edition documents nest `{name, collection: [...]}` groups inside
/// the top-level `collection` list.
fn flatten_groups(entries: Vec<Value>) -> Vec<Value> {
    let mut flat = Vec::with_capacity(entries.len());
    for entry in entries {
        match entry {
            Value::Object(mut map) if matches!(map.get("collection"), Some(Value::Array(_))) => {
                if let Some(Value::Array(inner)) = map.remove("collection") {
                    flat.extend(inner);
                }
            }
            other => flat.push(other),
        }
    }
    flat
}

/// Decode a section (or bulk edition) document into its entries in order.
/// Unrecognized shapes decode to no entries.
pub fn decode_section(value: Value) -> Vec<RawHadith> {
    let entries = match serde_json::from_value::<SectionPayload>(value) {
        Ok(payload) => payload.into_entries(),
        Err(_) => Vec::new(),
    };
    entries.into_iter().map(RawHadith::from_value).collect()
}

/// Point lookup document shapes
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PointPayload {
    Wrapped { hadiths: Vec<Value> },
    Single(Value),
}

/// Decode a single-hadith document. Returns `None` unless the entry
/// carries a hadith number.
pub fn decode_point(value: Value) -> Option<RawHadith> {
    let entry = match serde_json::from_value::<PointPayload>(value).ok()? {
        PointPayload::Wrapped { hadiths } => hadiths.into_iter().next()?,
        PointPayload::Single(value) => value,
    };
    let raw = RawHadith::from_value(entry);
    raw.hadithnumber.is_some().then_some(raw)
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty() && trimmed != "0").then(|| trimmed.to_string())
        }
        _ => None,
    })
}

fn lenient_grades<'de, D>(deserializer: D) -> Result<Vec<RawGrade>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_reference<'de, D>(deserializer: D) -> Result<Option<RawReference>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
