//! Schema-constrained prompt building.

use tscribe_models::extractor::{CustomAnalysis, KeyPoints, KeyQuotes, SalesEmail};
use tscribe_models::Extractor;

/// JSON schema for the extractor's output shape, embedded verbatim in the
/// instruction block.
pub fn schema_json(extractor_id: &str) -> String {
    let schema = match extractor_id {
        "key-quotes" => schemars::schema_for!(KeyQuotes),
        "sales-email" => schemars::schema_for!(SalesEmail),
        "key-points" => schemars::schema_for!(KeyPoints),
        _ => schemars::schema_for!(CustomAnalysis),
    };
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}

/// Build the full prompt for one analysis request.
///
/// `custom_prompt`, when present and non-empty, replaces the preset prompt.
pub fn build_prompt(extractor: &Extractor, custom_prompt: Option<&str>, transcript: &str) -> String {
    let instruction = custom_prompt
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(extractor.prompt);
    let schema = schema_json(extractor.id);

    format!(
        r#"{instruction}

IMPORTANT: You must strictly follow this output format.
Return ONLY a single JSON object that validates against this JSON schema:
{schema}

Here is the TRANSCRIPT of the video.

TRANSCRIPT:
{transcript}

Additional instructions:
- Return ONLY a single JSON object and nothing else.
- Every quote or claim must come from the transcript provided above.
"#
    )
}
