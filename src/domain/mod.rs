// Domain layer - Raw payload, panel configuration and panel data models
pub mod panel;
pub mod raw;
pub mod series;
pub mod table;
