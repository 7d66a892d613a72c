use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use metricboard_types::{DashboardCatalog, DashboardSpec};

use crate::components::metrics_dashboard::MetricsDashboard;
use crate::components::nav::Nav;

#[server]
async fn get_dashboards() -> Result<DashboardCatalog, ServerFnError> {
    let catalog = use_context::<DashboardCatalog>()
        .ok_or_else(|| ServerFnError::new("dashboard catalog unavailable"))?;
    Ok(catalog)
}

/// Picks the dashboard for a route: the landing dashboard when no slug is
/// given, otherwise the one with that slug.
fn select_dashboard(catalog: &DashboardCatalog, slug: Option<&str>) -> Option<DashboardSpec> {
    match slug {
        Some(slug) => catalog.find(slug).cloned(),
        None => catalog.landing().cloned(),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    #[allow(unused_variables)]
    let (catalog, setCatalog) = signal(Option::<Result<DashboardCatalog, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = get_dashboards().await.map_err(|e| e.to_string());
            setCatalog.set(Some(result));
        });
    }

    let params = use_params_map();
    let navigate = use_navigate();
    let goToPage = Callback::new(move |link: String| {
        navigate(&link, Default::default());
    });

    view! {
        {move || {
            match catalog.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading dashboards..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="load-error">"Failed to load dashboards: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(catalog)) => {
                    let slug = params.with(|p| p.get("slug"));
                    view! { <DashboardContent catalog=catalog slug=slug go_to_page=goToPage /> }
                        .into_any()
                }
            }
        }}
    }
}

#[component]
fn DashboardContent(
    catalog: DashboardCatalog,
    slug: Option<String>,
    go_to_page: Callback<String>,
) -> impl IntoView {
    let selected = select_dashboard(&catalog, slug.as_deref());
    let activeSlug = selected.as_ref().map(|d| d.slug.clone()).unwrap_or_default();

    let body = match selected {
        Some(dashboard) => {
            view! {
                <MetricsDashboard
                    title=dashboard.title
                    description=dashboard.description
                    go_to_page=go_to_page
                    metrics=dashboard.metrics
                />
            }
                .into_any()
        }
        None if catalog.is_empty() => {
            view! {
                <div class="card">
                    <div class="card-title">"No dashboards configured"</div>
                    <p class="subtitle">"Add a [[dashboards]] table to the console configuration."</p>
                </div>
            }
                .into_any()
        }
        None => {
            view! {
                <div class="card">
                    <div class="card-title">"Dashboard not found"</div>
                    <p class="subtitle">{format!("No dashboard named \"{}\".", slug.unwrap_or_default())}</p>
                </div>
            }
                .into_any()
        }
    };

    view! {
        <div class="app-layout">
            <Nav dashboards=catalog.dashboards active=activeSlug />
            <main class="main-content">{body}</main>
        </div>
    }
}
