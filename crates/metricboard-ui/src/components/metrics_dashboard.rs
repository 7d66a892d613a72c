use leptos::prelude::*;
use metricboard_types::MetricDescriptor;

/// Runs the activation of a metric's value control.
///
/// `target` is the metric's navigation target (see
/// [`MetricDescriptor::navigation_target`]); `None` means the metric is inert.
pub fn activate_metric(target: Option<&str>, go_to_page: &Callback<String>) {
    match target {
        Some(link) => go_to_page.run(link.to_string()),
        None => {}
    }
}

/// Title, description and one entry per metric, in the order given.
///
/// Each entry shows the metric's label and a button carrying its value.
/// Pressing the button of a linked metric hands the link to `go_to_page`;
/// pressing an unlinked one does nothing.
#[component]
pub fn MetricsDashboard(
    /// Heading text
    #[prop(into)]
    title: String,
    /// Line shown under the heading
    #[prop(into)]
    description: String,
    /// Called with a metric's link when its value is activated
    go_to_page: Callback<String>,
    /// Metrics in display order
    metrics: Vec<MetricDescriptor>,
) -> impl IntoView {
    view! {
        <div class="page-table metrics-dashboard">
            <h2>{title}</h2>
            <p class="header-description">{description}</p>
            <div class="content">
                {metrics
                    .into_iter()
                    .enumerate()
                    .map(|(index, metric)| {
                        let target = metric.navigation_target().map(str::to_string);
                        let isLinked = target.is_some();
                        let valueClass = if isLinked {
                            "btn btn-link metric-value"
                        } else {
                            "btn btn-link metric-value metric-value-static"
                        };
                        let dataLink = target.clone();
                        let valueText = metric.value.to_string();

                        view! {
                            <div class="metric-container" data-index=index.to_string()>
                                <p class="metric-label">{metric.title}</p>
                                <button
                                    type="button"
                                    class=valueClass
                                    data-link=dataLink
                                    aria-disabled=(!isLinked).then_some("true")
                                    on:click=move |_| {
                                        activate_metric(target.as_deref(), &go_to_page)
                                    }
                                >
                                    {valueText}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recorder() -> (Callback<String>, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let goToPage = Callback::new(move |link: String| {
            sink.lock().unwrap().push(link);
        });
        (goToPage, calls)
    }

    #[test]
    fn linked_metric_navigates_once_per_activation() {
        let owner = Owner::new();
        owner.with(|| {
            let (goToPage, calls) = recorder();
            let metric = MetricDescriptor::new("Users", 42).with_link("/users");

            activate_metric(metric.navigation_target(), &goToPage);
            assert_eq!(*calls.lock().unwrap(), vec!["/users".to_string()]);

            activate_metric(metric.navigation_target(), &goToPage);
            assert_eq!(calls.lock().unwrap().len(), 2);
        });
    }

    #[test]
    fn unlinked_metric_never_navigates() {
        let owner = Owner::new();
        owner.with(|| {
            let (goToPage, calls) = recorder();
            let missing = MetricDescriptor::new("Errors", 0);
            let empty = MetricDescriptor::new("Warnings", 3).with_link("");

            activate_metric(missing.navigation_target(), &goToPage);
            activate_metric(empty.navigation_target(), &goToPage);

            assert!(calls.lock().unwrap().is_empty());
        });
    }

    #[cfg(feature = "ssr")]
    mod render {
        use super::*;

        fn render(title: &str, description: &str, metrics: Vec<MetricDescriptor>) -> String {
            let owner = Owner::new();
            owner.with(|| {
                let (goToPage, _calls) = recorder();
                view! {
                    <MetricsDashboard
                        title=title
                        description=description
                        go_to_page=goToPage
                        metrics=metrics
                    />
                }
                .to_html()
            })
        }

        #[test]
        fn renders_title_description_and_entries_in_order() {
            let html = render(
                "Stats",
                "Overview",
                vec![
                    MetricDescriptor::new("Users", 42).with_link("/users"),
                    MetricDescriptor::new("Errors", 0),
                ],
            );

            assert!(html.contains("Stats"));
            assert!(html.contains("Overview"));
            assert_eq!(html.matches("class=\"metric-container\"").count(), 2);

            let usersAt = html.find("Users").unwrap();
            let errorsAt = html.find("Errors").unwrap();
            assert!(usersAt < errorsAt);
            assert!(html.contains(">42<"));
            assert!(html.contains(">0<"));
        }

        #[test]
        fn marks_linked_and_inert_controls() {
            let html = render(
                "Stats",
                "Overview",
                vec![
                    MetricDescriptor::new("Users", 42).with_link("/users"),
                    MetricDescriptor::new("Errors", 0),
                    MetricDescriptor::new("Warnings", "n/a").with_link(""),
                ],
            );

            assert!(html.contains("data-link=\"/users\""));
            assert_eq!(html.matches("data-link=").count(), 1);
            assert_eq!(html.matches("metric-value-static").count(), 2);
            assert_eq!(html.matches("aria-disabled=\"true\"").count(), 2);
        }

        #[test]
        fn empty_metrics_render_header_only() {
            let html = render("Nothing yet", "No metrics configured", Vec::new());

            assert!(html.contains("Nothing yet"));
            assert!(html.contains("No metrics configured"));
            assert_eq!(html.matches("metric-container").count(), 0);
        }

        #[test]
        fn entries_carry_their_position() {
            let html = render(
                "Stats",
                "Overview",
                vec![
                    MetricDescriptor::new("A", 1),
                    MetricDescriptor::new("B", 2),
                    MetricDescriptor::new("C", 3),
                ],
            );

            let first = html.find("data-index=\"0\"").unwrap();
            let second = html.find("data-index=\"1\"").unwrap();
            let third = html.find("data-index=\"2\"").unwrap();
            assert!(first < second && second < third);
        }
    }
}
