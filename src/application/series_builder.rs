// Series builder - Converts matrix results into graph series
use crate::application::legend::parse_legend_format;
use crate::domain::panel::PanelQuery;
use crate::domain::raw::{Labels, RawQueryResult, RawSeries};
use crate::domain::series::{SampleValue, SeriesData};
use crate::infrastructure::config::{replace_with_variables, VariableSet};

pub fn to_series(raw: &RawQueryResult, query: &PanelQuery, vars: &VariableSet) -> Vec<SeriesData> {
    let series = match raw {
        RawQueryResult::Matrix(series) => series,
        RawQueryResult::Unsupported { result_type } => {
            tracing::warn!("Ignoring unsupported result type for series: {}", result_type);
            return Vec::new();
        }
    };

    let legend = query.legend_template();
    let formats = parse_legend_format(legend);

    series
        .iter()
        .map(|m| {
            let mut data = build_series(&query.id, m);
            if let Some(template) = legend {
                data.name = format_legend(template, &formats, &data.value.labels, vars);
            }
            data
        })
        .collect()
}

fn build_series(id: &str, m: &RawSeries) -> SeriesData {
    let (times, values): (Vec<f64>, Vec<SampleValue>) = m
        .values
        .iter()
        .map(|v| (v.timestamp(), SampleValue::parse(v.raw_value())))
        .unzip();

    let data = SeriesData::new(
        id.to_string(),
        series_name(&m.metric),
        times,
        values,
        m.metric.clone(),
    );

    let invalid = data.invalid_count();
    if invalid > 0 {
        tracing::warn!("Series {} has {} unparseable samples", data.name, invalid);
    }

    data
}

/// Serialized label set with `:` swapped for `=`, e.g. `{"job"="node"}`
pub fn series_name(labels: &Labels) -> String {
    // A string-keyed map of strings always serializes
    serde_json::to_string(labels)
        .unwrap_or_default()
        .replace(':', "=")
}

fn format_legend(
    template: &str,
    formats: &[String],
    labels: &Labels,
    vars: &VariableSet,
) -> String {
    let mut name = template.to_string();
    for format in formats {
        if let Some(l) = labels.get(format).filter(|l| !l.is_empty()) {
            name = name.replace(&format!("{{{{{}}}}}", format), l);
        }
    }
    replace_with_variables(&name, vars)
}
