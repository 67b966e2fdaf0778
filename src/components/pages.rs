//! 各路由的占位页面，内容由各自的模块填充。

use crate::models::selected_entry;
use crate::router::Route;
use dioxus::prelude::*;

#[component]
fn Page(path: &'static str) -> Element {
    let label = selected_entry(path).map(|entry| entry.label).unwrap_or(path);
    rsx! {
        section { class: "page",
            h1 { class: "page-title", "{label}" }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { Page { path: "/dashboard" } }
}

#[component]
pub fn Extractions() -> Element {
    rsx! { Page { path: "/extractions" } }
}

#[component]
pub fn Analysis() -> Element {
    rsx! { Page { path: "/analysis" } }
}

#[component]
pub fn Alerts() -> Element {
    rsx! { Page { path: "/alerts" } }
}

#[component]
pub fn Incidents() -> Element {
    rsx! { Page { path: "/incidents" } }
}

#[component]
pub fn Reports() -> Element {
    rsx! { Page { path: "/reports" } }
}

#[component]
pub fn Settings() -> Element {
    rsx! { Page { path: "/settings" } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        section { class: "page not-found",
            h1 { class: "page-title", "Page not found" }
            p { "Nothing lives at {path}." }
            Link { to: Route::Dashboard {}, class: "nav-link", "Back to dashboard" }
        }
    }
}
