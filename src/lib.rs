//! Converts Prometheus range-query results into graph, stat and table panel data.
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use application::panel_service::{transform, PanelService};
pub use domain::panel::{Panel, PanelData, PanelQuery, PanelType, ValueCalculationType};
pub use domain::raw::RawQueryResult;
pub use infrastructure::config::VariableSet;
