// Panel and query configuration as supplied by the dashboard
use super::series::{SeriesData, StatPluginData};
use super::table::TableSeries;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelType {
    Graph,
    Stat,
    Table,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueCalculationType {
    Average,
    Min,
    Max,
    Sum,
    Last,
    First,
    Count,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatValueOptions {
    #[serde(default)]
    pub calc: Option<ValueCalculationType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatPluginOptions {
    #[serde(default)]
    pub value: StatValueOptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelPlugins {
    #[serde(default)]
    pub stat: StatPluginOptions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Panel {
    #[serde(rename = "type")]
    pub kind: PanelType,
    #[serde(default)]
    pub plugins: PanelPlugins,
}

impl Panel {
    pub fn new(kind: PanelType) -> Self {
        Self {
            kind,
            plugins: PanelPlugins::default(),
        }
    }

    pub fn stat_calc(&self) -> Option<ValueCalculationType> {
        self.plugins.stat.value.calc
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PanelQuery {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub legend: Option<String>,
}

impl PanelQuery {
    pub fn new(id: &str, legend: Option<&str>) -> Self {
        Self {
            id: id.to_string(),
            legend: legend.map(str::to_string),
        }
    }

    /// Legend template, if one is set and non-empty
    pub fn legend_template(&self) -> Option<&str> {
        self.legend.as_deref().filter(|l| !l.is_empty())
    }
}

/// Panel-shaped output of a transform
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PanelData {
    Graph(Vec<SeriesData>),
    Stat(StatPluginData),
    Table(Vec<TableSeries>),
}
