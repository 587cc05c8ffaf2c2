// Table panel models
use super::series::SampleValue;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableColumn {
    pub header: String,
    pub can_filter: bool,
}

impl TableColumn {
    pub fn filterable(header: &str) -> Self {
        Self {
            header: header.to_string(),
            can_filter: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Time")]
    pub time: f64,
    /// Rounded for display
    #[serde(rename = "Value")]
    pub value: SampleValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSeries {
    pub name: String,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow>,
}

impl TableSeries {
    /// Table with the fixed Time/Value schema and no rows yet
    pub fn new(name: String) -> Self {
        Self {
            name,
            columns: vec![TableColumn::filterable("Time"), TableColumn::filterable("Value")],
            rows: Vec::new(),
        }
    }
}
