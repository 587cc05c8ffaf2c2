// Canonical series models produced for graph and stat panels
use super::raw::Labels;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A parsed sample value. `Invalid` marks a value string that failed to
/// parse; backend `NaN`/`+Inf`/`-Inf` parse as regular numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleValue {
    Number(f64),
    Invalid,
}

/// Write a number the way Prometheus does: finite values as JSON numbers,
/// non-finite ones as `"NaN"`, `"+Inf"` or `"-Inf"`.
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str("NaN")
    } else if value.is_infinite() {
        serializer.serialize_str(if *value > 0.0 { "+Inf" } else { "-Inf" })
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Numbers as in [`serialize_number`]; `Invalid` as `{"invalid": true}`.
impl Serialize for SampleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SampleValue::Number(v) => serialize_number(v, serializer),
            SampleValue::Invalid => {
                let mut marker = serializer.serialize_struct("Invalid", 1)?;
                marker.serialize_field("invalid", &true)?;
                marker.end()
            }
        }
    }
}

impl SampleValue {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) => SampleValue::Number(v),
            Err(_) => SampleValue::Invalid,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            SampleValue::Number(v) => Some(*v),
            SampleValue::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, SampleValue::Invalid)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeField {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueField {
    pub name: String,
    pub values: Vec<SampleValue>,
    /// Labels of the originating series, used for legend templating only
    pub labels: Labels,
}

impl ValueField {
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().filter_map(SampleValue::as_number)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub length: usize,
    pub time: TimeField,
    pub value: ValueField,
}

impl SeriesData {
    pub fn new(
        id: String,
        name: String,
        times: Vec<f64>,
        values: Vec<SampleValue>,
        labels: Labels,
    ) -> Self {
        debug_assert_eq!(times.len(), values.len());
        Self {
            id,
            name,
            length: times.len(),
            time: TimeField {
                name: "Time".to_string(),
                values: times,
            },
            value: ValueField {
                name: "Value".to_string(),
                values,
                labels,
            },
        }
    }

    pub fn invalid_count(&self) -> usize {
        self.value.values.iter().filter(|v| v.is_invalid()).count()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatPluginData {
    pub series: Vec<SeriesData>,
    #[serde(serialize_with = "serialize_number")]
    pub value: f64,
}
