//! Parsing LLM replies into the extractor's typed output shape.

use serde_json::Value;
use tscribe_models::extractor::{CustomAnalysis, KeyPoints, KeyQuotes, SalesEmail};

use crate::error::{LlmError, LlmResult};

/// Strip a Markdown code fence if the model wrapped its JSON in one.
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let text = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
        .unwrap_or(text);
    text.strip_suffix("```").unwrap_or(text).trim()
}

/// Parse a reply against the extractor's output shape.
///
/// Unknown extractor ids validate against the custom shape. The typed value
/// is returned re-serialized, so the response carries exactly the schema
/// fields and nothing else the model may have invented.
pub fn parse_reply(extractor_id: &str, text: &str) -> LlmResult<Value> {
    let json = strip_code_fence(text);

    let value = match extractor_id {
        "key-quotes" => typed::<KeyQuotes>(json)?,
        "sales-email" => typed::<SalesEmail>(json)?,
        "key-points" => typed::<KeyPoints>(json)?,
        _ => typed::<CustomAnalysis>(json)?,
    };
    Ok(value)
}

fn typed<T: serde::de::DeserializeOwned + serde::Serialize>(json: &str) -> LlmResult<Value> {
    let parsed: T = serde_json::from_str(json)
        .map_err(|e| LlmError::BadReply(format!("reply does not match output schema: {e}")))?;
    serde_json::to_value(parsed).map_err(|e| LlmError::BadReply(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_json_fence() {
        let reply = "```json\n{\"analysis\": \"fine\"}\n```";
        let value = parse_reply("custom", reply).unwrap();
        assert_eq!(value["analysis"], "fine");
    }

    #[test]
    fn test_strips_bare_fence() {
        let reply = "```\n{\"analysis\": \"ok\"}\n```";
        let value = parse_reply("custom", reply).unwrap();
        assert_eq!(value["analysis"], "ok");
    }

    #[test]
    fn test_key_quotes_shape() {
        let reply = r#"{"quotes": [{"text": "t", "significance": "s", "context": "c"}]}"#;
        let value = parse_reply("key-quotes", reply).unwrap();
        assert_eq!(value["quotes"][0]["text"], "t");
    }

    #[test]
    fn test_sales_email_shape() {
        let reply = r#"{"subject": "s", "body": "b", "callToAction": "now"}"#;
        let value = parse_reply("sales-email", reply).unwrap();
        assert_eq!(value["callToAction"], "now");
    }

    #[test]
    fn test_key_points_shape() {
        let reply = r#"{"mainPoints": [{"point": "p", "evidence": "e"}], "conclusion": "c"}"#;
        let value = parse_reply("key-points", reply).unwrap();
        assert_eq!(value["conclusion"], "c");
    }

    #[test]
    fn test_wrong_shape_is_bad_reply() {
        let err = parse_reply("key-quotes", r#"{"analysis": "not quotes"}"#).unwrap_err();
        assert!(matches!(err, LlmError::BadReply(_)));
    }

    #[test]
    fn test_unknown_extractor_validates_as_custom() {
        let value = parse_reply("mystery", r#"{"analysis": "free-form"}"#).unwrap();
        assert_eq!(value["analysis"], "free-form");
    }

    #[test]
    fn test_non_json_is_bad_reply() {
        assert!(parse_reply("custom", "I'm sorry, I can't do that.").is_err());
    }
}
