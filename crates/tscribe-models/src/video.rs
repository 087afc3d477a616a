//! Video identifier type.

use serde::Serialize;

/// YouTube video IDs are always exactly this long.
pub const VIDEO_ID_LEN: usize = 11;

/// An opaque, validated 11-character YouTube video identifier.
///
/// Derived from a user-supplied URL once per request and discarded after
/// use. Only `VideoId::new` can construct one, so deliberately no
/// `Deserialize`: decoding a raw string would skip the length check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wrap a candidate token, enforcing the fixed length invariant.
    pub fn new(candidate: impl Into<String>) -> Option<Self> {
        let candidate = candidate.into();
        if candidate.len() == VIDEO_ID_LEN {
            Some(Self(candidate))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
