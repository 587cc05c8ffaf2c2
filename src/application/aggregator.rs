// Value aggregator - Reduces a series to a single stat value
use crate::domain::panel::ValueCalculationType;
use crate::domain::series::SeriesData;

/// Reduce the series' values with `calc`, falling back to the last value.
/// Unparseable samples only contribute to `Count`; any mode with nothing
/// to report yields 0. A NaN sample makes every mode that reads it NaN.
pub fn calc_value_on_series(series: &SeriesData, calc: Option<ValueCalculationType>) -> f64 {
    let values = &series.value;

    let result = match calc.unwrap_or(ValueCalculationType::Last) {
        ValueCalculationType::Average => {
            let (sum, n) = values.numbers().fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
            (n > 0).then(|| sum / n as f64)
        }
        ValueCalculationType::Min => values.numbers().reduce(|a, b| nan_or(a, b, f64::min)),
        ValueCalculationType::Max => values.numbers().reduce(|a, b| nan_or(a, b, f64::max)),
        ValueCalculationType::Sum => Some(values.numbers().sum()),
        ValueCalculationType::First => values.numbers().next(),
        ValueCalculationType::Count => Some(values.values.len() as f64),
        ValueCalculationType::Last | ValueCalculationType::Unknown => values.numbers().last(),
    };

    result.unwrap_or(0.0)
}

// f64::min/max drop a NaN operand
fn nan_or(a: f64, b: f64, pick: fn(f64, f64) -> f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        f64::NAN
    } else {
        pick(a, b)
    }
}
