use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::ExtractionResult;

/// Items and declared total may disagree by rounding up to this much.
pub const TOTAL_TOLERANCE: f64 = 0.01;

const LOG_PREVIEW_CHARS: usize = 500;

static BARE_UNDEFINED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\s*undefined\s*([,}])").unwrap());

static QUOTED_UNDEFINED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#":\s*"undefined"\s*([,}])"#).unwrap());

/// Turns free-form model output into a validated [`ExtractionResult`].
#[derive(Debug, Default)]
pub struct ResultExtractor;

impl ResultExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, raw_text: &str) -> Result<ExtractionResult, ExtractionError> {
        let candidate = locate_json(&strip_code_fence(raw_text.trim())).to_string();
        let repaired = repair_undefined(&candidate);

        let value: Value = serde_json::from_str(&repaired).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %preview(raw_text),
                "Failed to parse model response"
            );
            ExtractionError::ResponseParse(e.to_string())
        })?;

        match value.get("status") {
            None | Some(Value::Null) => {
                tracing::error!(response = %preview(raw_text), "Model response has no status");
                return Err(ExtractionError::InvalidResult(
                    "missing status field".to_string(),
                ));
            }
            Some(Value::String(s)) if s == "OK" || s == "ERROR" => {}
            Some(other) => {
                return Err(ExtractionError::InvalidResult(format!(
                    "unknown status {other}"
                )));
            }
        }

        let mut result: ExtractionResult = serde_json::from_value(value).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %preview(raw_text),
                "Model response does not match the invoice schema"
            );
            ExtractionError::ResponseParse(e.to_string())
        })?;

        reconcile_total(&mut result);

        let item_count = match &result {
            ExtractionResult::Ok(data) => data.line_items.len(),
            ExtractionResult::Error { .. } => 0,
        };
        tracing::info!(status = result.status(), item_count, "Invoice extracted");

        Ok(result)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("model response could not be parsed: {0}")]
    ResponseParse(String),
    #[error("model response is invalid: {0}")]
    InvalidResult(String),
}

fn strip_code_fence(text: &str) -> String {
    if !text.starts_with("```") {
        return text.to_string();
    }

    let mut lines: Vec<&str> = text.lines().skip(1).collect();
    if lines.last().is_some_and(|line| line.trim() == "```") {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}

/// Greedy first-`{` to last-`}` span, so prose around the object is dropped.
fn locate_json(text: &str) -> &str {
    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

fn repair_undefined(text: &str) -> String {
    let repaired = BARE_UNDEFINED.replace_all(text, ": null$1");
    QUOTED_UNDEFINED.replace_all(&repaired, ": null$1").into_owned()
}

fn reconcile_total(result: &mut ExtractionResult) {
    let ExtractionResult::Ok(data) = result else {
        return;
    };
    if data.line_items.is_empty() {
        return;
    }

    let items_total = data.items_total();
    let difference = (items_total - data.total_amount).abs();

    if difference > TOTAL_TOLERANCE {
        tracing::warn!(
            items_total,
            declared_total = data.total_amount,
            difference,
            "Declared total does not match line items, using item sum"
        );
        data.total_amount = items_total;
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(LOG_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}
