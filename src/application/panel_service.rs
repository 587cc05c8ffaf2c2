// Panel service - Routes raw query results to the panel-specific builder
use crate::application::aggregator::calc_value_on_series;
use crate::application::series_builder::to_series;
use crate::application::table_builder::to_table;
use crate::domain::panel::{Panel, PanelData, PanelQuery, PanelType, ValueCalculationType};
use crate::domain::raw::RawQueryResult;
use crate::domain::series::StatPluginData;
use crate::infrastructure::config::VariableSet;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Convert a raw backend result into the data shape of `panel`.
/// Returns `None` for absent data and for panel types without a converter.
pub fn transform(
    raw: Option<&RawQueryResult>,
    panel: &Panel,
    query: &PanelQuery,
    vars: &VariableSet,
) -> Option<PanelData> {
    let raw = raw?;

    tracing::debug!(
        "Transforming {} raw series for {:?} panel, query {}",
        raw.series_count(),
        panel.kind,
        query.id
    );

    match panel.kind {
        PanelType::Table => Some(PanelData::Table(to_table(raw))),
        PanelType::Graph => Some(PanelData::Graph(to_series(raw, query, vars))),
        PanelType::Stat => Some(PanelData::Stat(to_stat(raw, query, panel.stat_calc(), vars))),
        PanelType::Unknown => None,
    }
}

pub fn to_stat(
    raw: &RawQueryResult,
    query: &PanelQuery,
    calc: Option<ValueCalculationType>,
    vars: &VariableSet,
) -> StatPluginData {
    let series = to_series(raw, query, vars);
    let value = series
        .first()
        .map(|s| calc_value_on_series(s, calc))
        .unwrap_or(0.0);

    StatPluginData { series, value }
}

#[derive(Clone)]
pub struct PanelService {
    variables: Arc<VariableSet>,
}

impl PanelService {
    pub fn new(variables: VariableSet) -> Self {
        Self {
            variables: Arc::new(variables),
        }
    }

    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    /// Transform against a snapshot of the configured variables with
    /// `overrides` layered on top for this call only.
    pub fn transform(
        &self,
        raw: Option<&RawQueryResult>,
        panel: &Panel,
        query: &PanelQuery,
        overrides: &BTreeMap<String, String>,
    ) -> Option<PanelData> {
        if overrides.is_empty() {
            transform(raw, panel, query, &self.variables)
        } else {
            transform(raw, panel, query, &self.variables.merged(overrides))
        }
    }
}
