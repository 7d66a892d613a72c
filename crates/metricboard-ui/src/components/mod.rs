pub mod metrics_dashboard;
pub mod nav;
