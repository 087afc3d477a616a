//! Model catalog and LLM analysis.
//!
//! This crate provides:
//! - Discovery of models and live deployments from the configured
//!   model-serving backend, merged with the built-in Claude entry and
//!   cached in process memory.
//! - Schema-constrained prompt building for the extractor presets.
//! - Invocation of the chosen provider (Anthropic Messages API, or an
//!   OpenAI-compatible hosted deployment) and typed parsing of the reply.

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod providers;
pub mod reply;

pub use catalog::ModelCatalog;
pub use config::LlmConfig;
pub use engine::{AnalysisEngine, AnalyzeRequest};
pub use error::{LlmError, LlmResult};
