use dioxus::prelude::*;
use dioxus::router::Navigator;
use tracing::warn;

use crate::components::pages::{
    Alerts, Analysis, Dashboard, Extractions, Incidents, NotFound, Reports, Settings,
};
use crate::components::shell::Shell;
use crate::navigation::PathNavigator;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Shell)]
        #[redirect("/", || Route::Dashboard {})]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/extractions")]
        Extractions {},
        #[route("/analysis")]
        Analysis {},
        #[route("/alerts")]
        Alerts {},
        #[route("/incidents")]
        Incidents {},
        #[route("/reports")]
        Reports {},
        #[route("/settings")]
        Settings {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

/// 基于 dioxus router 的导航适配器
#[derive(Clone, Copy)]
pub struct RouterNavigator {
    navigator: Navigator,
}

impl RouterNavigator {
    /// 只能在组件内调用
    pub fn current() -> Self {
        Self {
            navigator: navigator(),
        }
    }
}

impl PathNavigator for RouterNavigator {
    fn navigate_to(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                self.navigator.push(route);
            }
            Err(err) => warn!(path, "cannot route path: {err}"),
        }
    }

    fn current_path(&self) -> String {
        router().current::<Route>().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{UiConfig, MENU_ENTRIES};
    use dioxus::router::components::HistoryProvider;
    use dioxus_history::{History, MemoryHistory};
    use std::rc::Rc;

    fn render_at(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            App,
            AppProps {
                path: path.to_string(),
            },
        );
        dom.rebuild_in_place();
        return dioxus_ssr::render(&dom);

        #[component]
        fn App(path: String) -> Element {
            use_context_provider(|| Signal::new(UiConfig::default()));
            rsx! {
                HistoryProvider {
                    history: move |_| Rc::new(MemoryHistory::with_initial_path(path.clone())) as Rc<dyn History>,
                    Router::<Route> {}
                }
            }
        }
    }

    /// 返回被选中项之后、下一个菜单项之前的片段
    fn selected_fragment(html: &str) -> &str {
        let start = html.find("nav-button selected").expect("no selected entry");
        let rest = &html[start..];
        let end = rest[1..].find("nav-button").map(|i| i + 1).unwrap_or(rest.len());
        &rest[..end]
    }

    #[test]
    fn current_route_marks_only_its_entry() {
        let html = render_at("/alerts");
        assert_eq!(html.matches("nav-button selected").count(), 1);
        assert!(selected_fragment(&html).contains("Alerts"));
        assert!(html.contains("drawer-permanent"));
        assert!(!html.contains("drawer-modal"));
    }

    #[test]
    fn root_redirects_to_dashboard() {
        let html = render_at("/");
        assert!(selected_fragment(&html).contains("Dashboard"));
    }

    #[test]
    fn unknown_route_selects_nothing() {
        let html = render_at("/nowhere");
        assert_eq!(html.matches("nav-button selected").count(), 0);
        assert!(html.contains("Page not found"));
    }

    #[test]
    fn every_menu_path_parses_to_its_route() {
        for entry in &MENU_ENTRIES {
            let route: Route = entry.path.parse().unwrap();
            assert!(!matches!(route, Route::NotFound { .. }), "{}", entry.path);
            assert_eq!(route.to_string(), entry.path);
        }
    }

    #[test]
    fn unknown_path_is_not_found() {
        let route: Route = "/does/not/exist".parse().unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["does".into(), "not".into(), "exist".into()]
            }
        );
    }
}
