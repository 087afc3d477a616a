//! Pipeline error types.

use thiserror::Error;

pub type TranscriptResult<T> = Result<T, TranscriptError>;

/// Everything that can go wrong between a pasted URL and a transcript.
///
/// Each stage fails fast; no error is retried or auto-recovered, and no
/// partial transcript is ever surfaced.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Invalid YouTube URL")]
    InvalidUrl,

    #[error("Failed to fetch {context}: {source}")]
    Fetch {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not find player response in page")]
    PlayerDataNotFound,

    #[error("Malformed player response data: {0}")]
    MalformedPlayerData(#[source] serde_json::Error),

    #[error("No caption tracks found")]
    NoCaptionTracks,

    #[error("Failed to parse transcript data")]
    EmptyTranscript,
}

impl TranscriptError {
    /// Stable machine-readable discriminant for the API error envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            TranscriptError::InvalidUrl => "INVALID_URL",
            TranscriptError::Fetch { .. } => "FETCH_ERROR",
            TranscriptError::PlayerDataNotFound => "PLAYER_DATA_NOT_FOUND",
            TranscriptError::MalformedPlayerData(_) => "MALFORMED_PLAYER_DATA",
            TranscriptError::NoCaptionTracks => "NO_CAPTION_TRACKS",
            TranscriptError::EmptyTranscript => "EMPTY_TRANSCRIPT",
        }
    }

    pub(crate) fn fetch(context: &'static str, source: reqwest::Error) -> Self {
        Self::Fetch { context, source }
    }
}
