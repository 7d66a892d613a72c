use leptos::prelude::*;
use metricboard_types::DashboardSpec;

pub fn dashboard_href(slug: &str) -> String {
    format!("/dashboards/{slug}")
}

#[component]
pub fn Nav(
    /// Dashboards listed in the sidebar, in catalog order
    dashboards: Vec<DashboardSpec>,
    /// Slug of the dashboard being shown
    #[prop(into)]
    active: String,
) -> impl IntoView {
    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">
                <div class="brand-icon">"M"</div>
                <span class="brand-text">"Metricboard"</span>
            </div>
            <ul class="nav-links">
                {dashboards
                    .into_iter()
                    .map(|dashboard| {
                        let itemClass = if dashboard.slug == active {
                            "nav-item active"
                        } else {
                            "nav-item"
                        };
                        view! {
                            <li class=itemClass>
                                <a href=dashboard_href(&dashboard.slug)>
                                    <span class="nav-icon">"\u{25A3}"</span>
                                    <span>{dashboard.title}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}
