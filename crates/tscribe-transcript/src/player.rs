//! Partial schema for the player-response blob.
//!
//! The blob is a large, externally-owned object; only the caption-track
//! list is consumed, so only that path is modeled. Every level of descent
//! is optional rather than assumed present.

use serde::Deserialize;
use tscribe_models::CaptionTrack;

use crate::error::{TranscriptError, TranscriptResult};

#[derive(Debug, Deserialize)]
struct PlayerResponse {
    #[serde(default)]
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct Captions {
    #[serde(rename = "playerCaptionsTracklistRenderer", default)]
    tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
struct TracklistRenderer {
    #[serde(rename = "captionTracks", default)]
    caption_tracks: Option<Vec<CaptionTrack>>,
}

/// Parse the located JSON text and descend to the caption-track list.
///
/// A parse failure is `MalformedPlayerData`; an absent path or empty list
/// is `NoCaptionTracks`.
pub fn parse_caption_tracks(json: &str) -> TranscriptResult<Vec<CaptionTrack>> {
    let response: PlayerResponse =
        serde_json::from_str(json).map_err(TranscriptError::MalformedPlayerData)?;

    let tracks = response
        .captions
        .and_then(|c| c.tracklist_renderer)
        .and_then(|r| r.caption_tracks)
        .unwrap_or_default();

    if tracks.is_empty() {
        return Err(TranscriptError::NoCaptionTracks);
    }
    Ok(tracks)
}
