//! Extractor presets and their typed analysis outputs.
//!
//! Each preset pairs a prompt with a fixed output shape. The shapes derive
//! `JsonSchema` so the LLM instruction block can embed the exact schema the
//! reply must satisfy.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named preset prompt with a fixed output schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extractor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub prompt: &'static str,
    pub example: &'static str,
}

/// The built-in presets, in display order.
pub const EXTRACTORS: &[Extractor] = &[
    Extractor {
        id: "key-quotes",
        name: "Key Quotes",
        description: "Pull out the most significant quotes with context",
        prompt: "Extract the most significant quotes from this transcript. For each \
                 quote, explain why it matters and the context it appeared in. \
                 Prefer verbatim wording from the transcript.",
        example: "\"The hardest part is starting\" — on overcoming inertia",
    },
    Extractor {
        id: "sales-email",
        name: "Sales Email",
        description: "Draft a persuasive email based on the video's content",
        prompt: "Write a persuasive sales email grounded in the content of this \
                 transcript. Include a compelling subject line, a concise body that \
                 references the key ideas, and a clear call to action.",
        example: "Subject: The one habit your team is missing...",
    },
    Extractor {
        id: "key-points",
        name: "Key Points",
        description: "Summarize the main points with supporting evidence",
        prompt: "Summarize the main points of this transcript. For each point, cite \
                 the supporting evidence from the transcript, and finish with a \
                 one-paragraph conclusion.",
        example: "1. Consistency beats intensity (cited 3 times)...",
    },
    Extractor {
        id: "custom",
        name: "Custom Analysis",
        description: "Free-form analysis with your own prompt",
        prompt: "Analyze this transcript and report your findings.",
        example: "Whatever you ask for",
    },
];

impl Extractor {
    /// Look up a preset by id. Unknown ids fall back to the custom preset.
    pub fn find(id: &str) -> &'static Extractor {
        EXTRACTORS
            .iter()
            .find(|e| e.id == id)
            .unwrap_or_else(|| Extractor::custom())
    }

    pub fn custom() -> &'static Extractor {
        &EXTRACTORS[EXTRACTORS.len() - 1]
    }
}

// ============================================================================
// Typed output shapes
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub text: String,
    pub significance: String,
    pub context: String,
}

/// Output shape for the `key-quotes` preset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyQuotes {
    pub quotes: Vec<Quote>,
}

/// Output shape for the `sales-email` preset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesEmail {
    pub subject: String,
    pub body: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MainPoint {
    pub point: String,
    pub evidence: String,
}

/// Output shape for the `key-points` preset.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeyPoints {
    pub main_points: Vec<MainPoint>,
    pub conclusion: String,
}

/// Output shape for the `custom` preset (and unknown extractor ids).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomAnalysis {
    pub analysis: String,
}
