use std::sync::Arc;

use metricboard_types::DashboardCatalog;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<DashboardCatalog>,
}

impl AppState {
    pub fn new(catalog: DashboardCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
