//! YouTube caption transcript extraction.
//!
//! This crate turns an arbitrary YouTube URL into a normalized plain-text
//! transcript:
//! 1. Extract the 11-character video id from the URL.
//! 2. Fetch the public watch page.
//! 3. Locate and parse the embedded `ytInitialPlayerResponse` blob.
//! 4. Rank the available caption tracks and pick the best one.
//! 5. Fetch the track's `fmt=json3` payload, flatten and normalize it.
//!
//! The player-response embedding convention and the `fmt=json3` payload are
//! undocumented, versionless formats; the boundary heuristic that finds the
//! blob is isolated behind [`PlayerLocator`] so it can be replaced without
//! touching the rest of the pipeline.

pub mod client;
pub mod error;
pub mod locator;
pub mod normalize;
pub mod player;
pub mod selector;
pub mod url;

pub use client::TranscriptClient;
pub use error::{TranscriptError, TranscriptResult};
pub use locator::{PlayerLocator, ScriptBoundaryLocator};
pub use normalize::{flatten_events, normalize_text};
pub use selector::select_track;
pub use url::extract_video_id;
