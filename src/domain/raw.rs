// Raw range-query payload as returned by the metrics backend
use serde::Deserialize;
use std::collections::BTreeMap;

/// Label name -> label value identity of a series
pub type Labels = BTreeMap<String, String>;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("raw data must be a JSON object, got {0}")]
    NotAnObject(&'static str),
    #[error("missing resultType discriminator")]
    MissingResultType,
    #[error("malformed query result: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawQueryResult {
    Matrix(Vec<RawSeries>),
    /// Any other discriminator (vector, scalar, string, ...)
    Unsupported { result_type: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSeries {
    #[serde(default)]
    pub metric: Labels,
    #[serde(default)]
    pub values: Vec<RawSample>,
}

/// One `[timestamp, "value"]` pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawSample(pub f64, pub String);

impl RawSample {
    pub fn timestamp(&self) -> f64 {
        self.0
    }

    pub fn raw_value(&self) -> &str {
        &self.1
    }
}

#[derive(Debug, Deserialize)]
struct WireResult {
    #[serde(rename = "resultType")]
    result_type: Option<String>,
    #[serde(default)]
    result: serde_json::Value,
}

impl RawQueryResult {
    /// Decode a backend payload. `null` and `{}` are treated as absent data.
    pub fn from_json(value: serde_json::Value) -> Result<Option<Self>, DecodeError> {
        let is_empty = match &value {
            serde_json::Value::Null => true,
            serde_json::Value::Object(map) => map.is_empty(),
            serde_json::Value::Bool(_) => return Err(DecodeError::NotAnObject("a boolean")),
            serde_json::Value::Number(_) => return Err(DecodeError::NotAnObject("a number")),
            serde_json::Value::String(_) => return Err(DecodeError::NotAnObject("a string")),
            serde_json::Value::Array(_) => return Err(DecodeError::NotAnObject("an array")),
        };
        if is_empty {
            return Ok(None);
        }

        let wire: WireResult = serde_json::from_value(value)?;
        let result_type = wire.result_type.ok_or(DecodeError::MissingResultType)?;

        if result_type == "matrix" {
            let series = match wire.result {
                serde_json::Value::Null => Vec::new(),
                other => serde_json::from_value(other)?,
            };
            Ok(Some(RawQueryResult::Matrix(series)))
        } else {
            tracing::debug!("Decoded unsupported result type: {}", result_type);
            Ok(Some(RawQueryResult::Unsupported { result_type }))
        }
    }

    pub fn series_count(&self) -> usize {
        match self {
            RawQueryResult::Matrix(series) => series.len(),
            RawQueryResult::Unsupported { .. } => 0,
        }
    }
}
