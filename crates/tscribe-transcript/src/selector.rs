//! Caption-track ranking.

use tscribe_models::CaptionTrack;

/// Pick the best caption track from a non-empty list.
///
/// Ranking, highest priority first:
/// 1. English (`languageCode == "en"`) before all others.
/// 2. Among ties, manually authored captions before ASR.
/// 3. Otherwise original relative order (the sort is stable).
///
/// Returns `None` only for an empty list.
pub fn select_track(tracks: &[CaptionTrack]) -> Option<&CaptionTrack> {
    let mut ranked: Vec<&CaptionTrack> = tracks.iter().collect();
    ranked.sort_by_key(|t| (!t.is_english(), t.is_asr()));
    ranked.first().copied()
}
