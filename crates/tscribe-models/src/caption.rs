//! Caption track and caption payload wire types.
//!
//! These mirror the parts of YouTube's player response and `fmt=json3`
//! caption payload that the pipeline actually consumes. Both are
//! undocumented, versionless formats, so every field is decoded
//! defensively.

use serde::{Deserialize, Serialize};

/// One available subtitle stream for a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// Retrieval address for the caption payload.
    pub base_url: String,
    /// BCP-47-ish language code as supplied by the page (e.g. "en").
    #[serde(default)]
    pub language_code: String,
    /// `"asr"` for auto-generated tracks; absent or other for manual ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl CaptionTrack {
    /// Whether this track was produced by automatic speech recognition.
    pub fn is_asr(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }

    pub fn is_english(&self) -> bool {
        self.language_code == "en"
    }
}

/// Top-level `fmt=json3` caption payload: an ordered sequence of events.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionPayload {
    #[serde(default)]
    pub events: Vec<CaptionEvent>,
}

/// One timed caption unit. Events without segments carry no text
/// (position-only markers) and are discarded by the normalizer.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionEvent {
    #[serde(default)]
    pub segs: Option<Vec<CaptionSegment>>,
}

/// One text segment within an event.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptionSegment {
    #[serde(default)]
    pub utf8: Option<String>,
}
