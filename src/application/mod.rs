// Application layer - Use cases turning raw results into panel data
pub mod aggregator;
pub mod legend;
pub mod panel_service;
pub mod series_builder;
pub mod table_builder;
