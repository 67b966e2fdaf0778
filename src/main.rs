#![allow(non_snake_case)]

mod components;
mod models;
mod navigation;
mod router;
mod services;

use dioxus::prelude::*;

use crate::router::Route;
use crate::services::config::load_config;

fn main() {
    dioxus_logger::init(tracing::Level::INFO).expect("failed to init logger");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let window_builder = WindowBuilder::new()
            .with_title("Security Dashboard")
            .with_inner_size(LogicalSize::new(1280.0, 800.0))
            .with_min_inner_size(LogicalSize::new(360.0, 480.0));

        let config = Config::new().with_window(window_builder);
        LaunchBuilder::desktop().with_cfg(config).launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    launch(App);
}

#[component]
fn App() -> Element {
    // 配置只读，整个应用共享
    use_context_provider(|| Signal::new(load_config()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}
