use crate::components::sidebar::Sidebar;
use crate::models::{UiConfig, ViewportClass};
use crate::navigation::ViewportClassifier;
use crate::router::Route;
use dioxus::prelude::*;

/// 视口宽度（逻辑像素），由根容器的 resize 事件驱动
#[derive(Clone, Copy, PartialEq)]
pub struct Viewport {
    width: Signal<f64>,
    breakpoint: f64,
}

impl Viewport {
    /// 渲染时调用会订阅宽度变化
    pub fn class(&self) -> ViewportClass {
        ViewportClass::from_width((self.width)(), self.breakpoint)
    }
}

impl ViewportClassifier for Viewport {
    fn classify(&self) -> ViewportClass {
        ViewportClass::from_width(*self.width.peek(), self.breakpoint)
    }
}

#[component]
pub fn Shell() -> Element {
    let config = use_context::<Signal<UiConfig>>();
    let breakpoint = config.read().breakpoint_px;
    // 首次 resize 事件到达前按桌面端处理
    let mut width = use_signal(|| breakpoint);
    let viewport = use_context_provider(|| Viewport { width, breakpoint });
    let mut drawer_open = use_signal(|| false);

    let is_mobile = viewport.class() == ViewportClass::Mobile;
    let title = config.read().title.clone();

    rsx! {
        div {
            class: if is_mobile { "app-shell mobile" } else { "app-shell" },
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.data().get_border_box_size() {
                    if size.width != width() {
                        width.set(size.width);
                    }
                }
            },

            header { class: "app-bar",
                if is_mobile {
                    div {
                        class: "icon-btn menu-toggle",
                        title: "Open navigation",
                        onclick: move |_| drawer_open.set(!drawer_open()),
                        "☰"
                    }
                }
                div { class: "title-text", "{title}" }
            }

            Sidebar {
                open: drawer_open(),
                on_close: move |_| drawer_open.set(false),
            }

            main { class: "content-area", Outlet::<Route> {} }
        }
    }
}
