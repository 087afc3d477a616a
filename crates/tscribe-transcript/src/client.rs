//! The extraction orchestrator.

use reqwest::Client;
use tracing::{debug, info};
use tscribe_models::CaptionPayload;

use crate::error::{TranscriptError, TranscriptResult};
use crate::locator::{PlayerLocator, ScriptBoundaryLocator};
use crate::normalize::{flatten_events, normalize_text};
use crate::player::parse_caption_tracks;
use crate::selector::select_track;
use crate::url::extract_video_id;

const DEFAULT_WATCH_BASE: &str = "https://www.youtube.com";

/// Watch pages served to non-browser agents often omit the player blob.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                          AppleWebKit/537.36 (KHTML, like Gecko) \
                          Chrome/120.0.0.0 Safari/537.36";

/// Sequences the extraction pipeline: URL → watch page → player data →
/// track selection → caption fetch → normalization.
///
/// Holds no per-request state; the two outbound fetches within a request
/// are sequential by data dependency. Any stage failure short-circuits the
/// rest and is terminal for the request.
pub struct TranscriptClient {
    http: Client,
    watch_base: String,
    locator: Box<dyn PlayerLocator>,
}

impl TranscriptClient {
    pub fn new() -> Self {
        Self::with_watch_base(DEFAULT_WATCH_BASE)
    }

    /// Build against an alternative watch-page origin (tests).
    pub fn with_watch_base(base: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            watch_base: base.into().trim_end_matches('/').to_string(),
            locator: Box::new(ScriptBoundaryLocator),
        }
    }

    /// Honors `WATCH_BASE_URL` when set.
    pub fn from_env() -> Self {
        match std::env::var("WATCH_BASE_URL") {
            Ok(base) if !base.trim().is_empty() => Self::with_watch_base(base),
            _ => Self::new(),
        }
    }

    /// Swap the player-data locating heuristic.
    pub fn with_locator(mut self, locator: impl PlayerLocator + 'static) -> Self {
        self.locator = Box::new(locator);
        self
    }

    /// Extract a normalized transcript for a pasted YouTube URL.
    pub async fn extract(&self, video_url: &str) -> TranscriptResult<String> {
        let video_id = extract_video_id(video_url)?;
        debug!(video_id = %video_id, "Extracting transcript");

        let page_url = format!("{}/watch?v={}", self.watch_base, video_id);
        let html = self.get_text(&page_url, "watch page").await?;

        let player_json = self
            .locator
            .locate(&html)
            .ok_or(TranscriptError::PlayerDataNotFound)?;
        let tracks = parse_caption_tracks(player_json)?;
        debug!(count = tracks.len(), "Found caption tracks");

        let track = select_track(&tracks).ok_or(TranscriptError::NoCaptionTracks)?;
        debug!(
            language = %track.language_code,
            asr = track.is_asr(),
            "Selected caption track"
        );

        let caption_url = format!("{}&fmt=json3", track.base_url);
        let body = self.get_text(&caption_url, "captions").await?;
        let payload: CaptionPayload =
            serde_json::from_str(&body).map_err(|_| TranscriptError::EmptyTranscript)?;

        let transcript = normalize_text(&flatten_events(&payload.events));
        if transcript.is_empty() {
            return Err(TranscriptError::EmptyTranscript);
        }

        info!(
            video_id = %video_id,
            chars = transcript.len(),
            "Transcript extracted"
        );
        Ok(transcript)
    }

    async fn get_text(&self, url: &str, context: &'static str) -> TranscriptResult<String> {
        let response = self
            .http
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| TranscriptError::fetch(context, e))?
            .error_for_status()
            .map_err(|e| TranscriptError::fetch(context, e))?;

        response
            .text()
            .await
            .map_err(|e| TranscriptError::fetch(context, e))
    }
}

impl Default for TranscriptClient {
    fn default() -> Self {
        Self::new()
    }
}
