// Table builder - Converts matrix results into table rows
use crate::application::series_builder::series_name;
use crate::domain::raw::RawQueryResult;
use crate::domain::series::SampleValue;
use crate::domain::table::{TableRow, TableSeries};

const VALUE_PRECISION: i32 = 5;

pub fn to_table(raw: &RawQueryResult) -> Vec<TableSeries> {
    let series = match raw {
        RawQueryResult::Matrix(series) => series,
        RawQueryResult::Unsupported { result_type } => {
            tracing::warn!("Ignoring unsupported result type for table: {}", result_type);
            return Vec::new();
        }
    };

    series
        .iter()
        .map(|m| {
            let mut table = TableSeries::new(series_name(&m.metric));
            table.rows = m
                .values
                .iter()
                .map(|v| TableRow {
                    time: v.timestamp(),
                    value: match SampleValue::parse(v.raw_value()) {
                        SampleValue::Number(n) => SampleValue::Number(round(n, VALUE_PRECISION)),
                        SampleValue::Invalid => SampleValue::Invalid,
                    },
                })
                .collect();
            table
        })
        .collect()
}

/// Round to `precision` decimal digits by shifting the decimal exponent of
/// the shortest representation, so 1.005 rounds to 1.01 at precision 2.
/// Halves round toward positive infinity.
fn round(value: f64, precision: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let shifted = match format!("{}e{}", value, precision).parse::<f64>() {
        Ok(v) => v,
        Err(_) => return value,
    };
    let rounded = (shifted + 0.5).floor();
    format!("{}e{}", rounded, -precision)
        .parse::<f64>()
        .unwrap_or(value)
}
