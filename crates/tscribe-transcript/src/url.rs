//! YouTube URL parsing.
//!
//! Pure string processing, no network. URLs are untrusted input; the only
//! thing extracted is an 11-character video id.

use std::sync::OnceLock;

use regex::Regex;
use tscribe_models::VideoId;

use crate::error::{TranscriptError, TranscriptResult};

/// One capturing pattern covering the supported URL shapes:
/// `youtu.be/<id>`, `/v/<id>`, `/u/<digit>/<id>`, `/embed/<id>`, and the
/// `?v=` / `&v=` query forms. The candidate stops at the next `#`, `&`
/// or `?`.
fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?:youtu\.be/|/v/|/u/\d/|/embed/|[?&]v=)([^#&?]*)")
            .expect("video id pattern is valid")
    })
}

/// Extract the video id from an arbitrary YouTube URL.
///
/// The candidate must be exactly 11 characters; any other length, or no
/// match at all, is [`TranscriptError::InvalidUrl`].
pub fn extract_video_id(url: &str) -> TranscriptResult<VideoId> {
    id_pattern()
        .captures(url.trim())
        .and_then(|caps| caps.get(1))
        .and_then(|m| VideoId::new(m.as_str()))
        .ok_or(TranscriptError::InvalidUrl)
}
