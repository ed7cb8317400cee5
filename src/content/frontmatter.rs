//! Front-matter parsing
//!
//! Documents start with a YAML header block delimited by `---` lines.
//! Everything the header does not declare falls back to defaults at the
//! mapping boundary in [`super::document`].

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// Custom deserializer that accepts both a single string and a list of
/// strings. Authors write `tags: Jazz` as often as a proper list.
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_string<E>(self, value: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

/// Metadata header of a markdown document.
///
/// Field names follow what the content authors actually write
/// (camelCase keys like `dateAdded`). Unknown keys are preserved in
/// authored order in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    /// Explicit slug override; otherwise the slug is derived from the
    /// file name.
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    /// The show archive authors `summary` where the blog uses `excerpt`.
    pub summary: Option<String>,
    #[serde(deserialize_with = "string_or_vec", default)]
    pub tags: Vec<String>,
    pub date: Option<String>,
    #[serde(rename = "dateAdded")]
    pub date_added: Option<String>,
    #[serde(rename = "dateModified")]
    pub date_modified: Option<String>,
    pub thumbnail: Option<String>,
    #[serde(rename = "coverImage")]
    pub cover_image: Option<String>,
    #[serde(rename = "featuredImage")]
    pub featured_image: Option<String>,

    /// Additional custom fields (author, show number, social image, ...)
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from the start of a document.
    /// Returns the header and the remaining body.
    ///
    /// A malformed header never fails the document: it is logged and the
    /// whole input is treated as body text.
    pub fn parse(content: &str) -> (Self, &str) {
        let content = content.trim_start();

        let Some(rest) = content.strip_prefix("---") else {
            return (FrontMatter::default(), content);
        };
        let rest = rest.trim_start_matches(['\n', '\r']);

        let Some(end_pos) = rest.find("\n---") else {
            // No closing delimiter, the --- was a horizontal rule.
            return (FrontMatter::default(), content);
        };

        let header = &rest[..end_pos];
        let body = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if header.trim().is_empty() {
            return (FrontMatter::default(), body);
        }

        // A --- block without any `key: value` line is markdown content
        // (thematic breaks), not a header.
        if !looks_like_yaml(header) {
            return (FrontMatter::default(), content);
        }

        match serde_yaml::from_str::<FrontMatter>(header) {
            Ok(fm) => (fm, body),
            Err(e) => {
                tracing::warn!("Failed to parse front-matter, treating as content: {}", e);
                (FrontMatter::default(), content)
            }
        }
    }

    /// When this document was first published. Falls back through
    /// `dateAdded`, `date`, then the current time.
    pub fn resolved_date_added(&self) -> DateTime<Local> {
        self.date_added
            .as_deref()
            .or(self.date.as_deref())
            .and_then(parse_date_string)
            .unwrap_or_else(Local::now)
    }

    /// When this document last changed. Falls back through
    /// `dateModified` and then the `dateAdded` chain.
    pub fn resolved_date_modified(&self) -> DateTime<Local> {
        self.date_modified
            .as_deref()
            .and_then(parse_date_string)
            .unwrap_or_else(|| self.resolved_date_added())
    }
}

/// Check whether a candidate header block has at least one line in
/// `key: value` shape with a plain identifier key.
fn looks_like_yaml(header: &str) -> bool {
    header.lines().any(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return false;
        }
        let Some(colon_pos) = trimmed.find(':') else {
            return false;
        };
        let key = &trimmed[..colon_pos];
        let valid_key = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
            // A colon inside a bare URL is not a key separator.
            && !matches!(key, "http" | "https" | "ftp");
        if !valid_key {
            return false;
        }
        let after = &trimmed[colon_pos + 1..];
        after.is_empty() || after.starts_with(' ')
    })
}

/// Parse a date string in the formats content authors actually use.
fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    // RFC 3339 / ISO 8601 with offset first, the canonical form.
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    let datetime_formats = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return local_from_naive(dt);
        }
    }

    if let Ok(d) = chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return local_from_naive(d.and_hms_opt(0, 0, 0)?);
    }

    None
}

/// Interpret a naive timestamp as local wall-clock time. Falls back to
/// the earlier candidate when the timestamp lands in a DST transition.
fn local_from_naive(dt: NaiveDateTime) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&dt)
        .single()
        .or_else(|| Local.from_local_datetime(&dt).earliest())
}
