//! Shared data models for the TubeScribe backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video identifiers and caption tracks
//! - Caption payload (json3) events
//! - The model catalog and its deployments
//! - Extractor presets and their typed analysis outputs

pub mod caption;
pub mod catalog;
pub mod extractor;
pub mod video;

// Re-export common types
pub use caption::{CaptionEvent, CaptionPayload, CaptionSegment, CaptionTrack};
pub use catalog::{Deployment, Model, ModelType};
pub use extractor::{
    CustomAnalysis, Extractor, KeyPoints, KeyQuotes, MainPoint, Quote, SalesEmail,
};
pub use video::VideoId;
