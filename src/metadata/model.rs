use serde::{Deserialize, Serialize};

use crate::foundation::error::{ThumbError, ThumbResult};

/// Placeholder used when a lookup returned no usable title.
pub const UNKNOWN_TITLE: &str = "Unsupported Title";
/// Placeholder used when a lookup returned no duration.
pub const UNKNOWN_DURATION: &str = "Unknown Mins";
/// Placeholder used when a lookup returned no view count.
pub const UNKNOWN_VIEWS: &str = "Unknown Views";
/// Placeholder used when a lookup returned no channel name.
pub const UNKNOWN_CHANNEL: &str = "Unknown Channel";

/// Text fields drawn on a thumbnail. Every field is non-empty plain text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMetadata", into = "RawMetadata")]
pub struct Metadata {
    title: String,
    duration: String,
    views: String,
    channel: String,
}

#[derive(Serialize, Deserialize)]
struct RawMetadata {
    title: String,
    duration: String,
    views: String,
    channel: String,
}

impl TryFrom<RawMetadata> for Metadata {
    type Error = ThumbError;

    fn try_from(raw: RawMetadata) -> Result<Self, Self::Error> {
        Metadata::new(raw.title, raw.duration, raw.views, raw.channel)
    }
}

impl From<Metadata> for RawMetadata {
    fn from(m: Metadata) -> Self {
        Self {
            title: m.title,
            duration: m.duration,
            views: m.views,
            channel: m.channel,
        }
    }
}

impl Metadata {
    /// Build metadata, stripping control characters and surrounding whitespace.
    ///
    /// Fails with a validation error if any field ends up empty; callers substitute placeholders
    /// before this point (see [`Metadata::from_record`]).
    pub fn new(
        title: impl AsRef<str>,
        duration: impl AsRef<str>,
        views: impl AsRef<str>,
        channel: impl AsRef<str>,
    ) -> ThumbResult<Self> {
        Ok(Self {
            title: clean_field("title", title.as_ref())?,
            duration: clean_field("duration", duration.as_ref())?,
            views: clean_field("views", views.as_ref())?,
            channel: clean_field("channel", channel.as_ref())?,
        })
    }

    /// Build metadata from a raw lookup record, normalizing the title and filling placeholders
    /// for anything missing.
    pub fn from_record(record: &SearchRecord) -> Self {
        fn or_placeholder(v: Option<&str>, placeholder: &str) -> String {
            v.map(strip_controls)
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| placeholder.to_owned())
        }

        let title = record
            .title
            .as_deref()
            .map(normalize_title)
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNKNOWN_TITLE.to_owned());

        Self {
            title,
            duration: or_placeholder(record.duration.as_deref(), UNKNOWN_DURATION),
            views: or_placeholder(record.view_count.as_deref(), UNKNOWN_VIEWS),
            channel: or_placeholder(record.channel.as_deref(), UNKNOWN_CHANNEL),
        }
    }

    /// Video title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Human-readable duration, e.g. `"3:32"`.
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Human-readable view count, e.g. `"1.2M views"`.
    pub fn views(&self) -> &str {
        &self.views
    }

    /// Channel name.
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// The `"<channel> | <views>"` info line.
    pub fn info_line(&self) -> String {
        format!("{} | {}", self.channel, self.views)
    }
}

/// Raw result of a video lookup, as returned by an external search collaborator.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchRecord {
    /// Raw title.
    pub title: Option<String>,
    /// Duration label.
    pub duration: Option<String>,
    /// Short view-count label.
    #[serde(alias = "views")]
    pub view_count: Option<String>,
    /// Channel name.
    pub channel: Option<String>,
    /// URL of the source thumbnail, possibly with a query string.
    pub thumbnail_url: Option<String>,
}

impl SearchRecord {
    /// Thumbnail URL without its query string.
    pub fn source_url(&self) -> Option<&str> {
        let url = self.thumbnail_url.as_deref()?;
        let url = url.split_once('?').map_or(url, |(base, _)| base);
        if url.is_empty() { None } else { Some(url) }
    }
}

fn clean_field(name: &str, value: &str) -> ThumbResult<String> {
    let cleaned = strip_controls(value);
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(ThumbError::validation(format!(
            "metadata field '{name}' must not be empty"
        )));
    }
    Ok(cleaned.to_owned())
}

fn strip_controls(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .filter(|c| !is_format_char(*c))
        .collect()
}

// Zero-width and bidi formatting characters that would otherwise shape as invisible glyphs.
fn is_format_char(c: char) -> bool {
    matches!(
        c,
        '\u{200B}'..='\u{200F}' | '\u{202A}'..='\u{202E}' | '\u{2060}'..='\u{2064}' | '\u{FEFF}'
    )
}

/// Collapse every run of non-word characters into one space and title-case each word.
///
/// Word characters are alphanumerics and `_`. A letter is upper-cased when it follows a
/// non-letter and lower-cased otherwise.
pub fn normalize_title(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;
    let mut prev_letter = false;
    for c in raw.chars() {
        if !(c.is_alphanumeric() || c == '_') {
            pending_space = true;
            prev_letter = false;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/metadata/model.rs"]
mod tests;
