use crate::components::shell::Viewport;
use crate::models::{MenuEntry, UiConfig};
use crate::navigation::{activate_entry, NavItemView, PathNavigator, SidebarView};
use crate::router::{Route, RouterNavigator};
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn Sidebar(open: bool, on_close: EventHandler<()>) -> Element {
    let config = use_context::<Signal<UiConfig>>();
    let viewport = use_context::<Viewport>();
    // 订阅路由变化，路径本身从 navigator 读
    let _route = use_route::<Route>();
    let router_nav = RouterNavigator::current();

    let view = SidebarView::build(&router_nav.current_path(), open, viewport.class());

    rsx! {
        SidebarPanel {
            view,
            drawer_width: config.read().drawer_width_px,
            on_activate: move |entry: &'static MenuEntry| {
                activate_entry(entry, &router_nav, &viewport, || on_close.call(()));
            },
            on_close,
        }
    }
}

fn dismisses_overlay(key: &Key) -> bool {
    *key == Key::Escape
}

#[component]
fn SidebarPanel(
    view: SidebarView,
    drawer_width: f64,
    on_activate: EventHandler<&'static MenuEntry>,
    on_close: EventHandler<()>,
) -> Element {
    let mut overlay = use_signal(|| None::<Rc<MountedData>>);
    let overlay_visible = view.overlay_visible();

    // 打开时把焦点移到遮罩层上，Esc 才能收到
    use_effect(use_reactive!(|(overlay_visible,)| {
        if !overlay_visible {
            return;
        }
        if let Some(element) = overlay() {
            spawn(async move {
                if let Err(err) = element.set_focus(true).await {
                    tracing::debug!("overlay focus failed: {err:?}");
                }
            });
        }
    }));

    let drawer_style = format!("width: {drawer_width}px;");

    rsx! {
        if view.permanent_visible() {
            nav { class: "drawer drawer-permanent", style: "{drawer_style}",
                NavList { items: view.items.clone(), on_activate }
            }
        } else {
            // 保持挂载，只切换可见性
            div {
                class: if overlay_visible { "drawer-modal open" } else { "drawer-modal" },
                aria_hidden: !overlay_visible,
                tabindex: "-1",
                onmounted: move |evt: MountedEvent| overlay.set(Some(evt.data())),
                onkeydown: move |evt: KeyboardEvent| {
                    if dismisses_overlay(&evt.key()) {
                        on_close.call(());
                    }
                },
                div {
                    class: "drawer-backdrop",
                    onclick: move |_| on_close.call(()),
                }
                nav { class: "drawer drawer-temporary", style: "{drawer_style}",
                    NavList { items: view.items.clone(), on_activate }
                }
            }
        }
    }
}

#[component]
fn NavList(items: Vec<NavItemView>, on_activate: EventHandler<&'static MenuEntry>) -> Element {
    rsx! {
        div { class: "drawer-content",
            div { class: "drawer-toolbar" }
            ul { class: "nav-list",
                for item in items {
                    li { key: "{item.entry.path}", class: "nav-list-item",
                        div {
                            class: if item.selected { "nav-button selected" } else { "nav-button" },
                            role: "button",
                            aria_current: if item.selected { "page" },
                            onclick: move |_| on_activate.call(item.entry),
                            span { class: "nav-icon nav-icon-{item.entry.icon.name()}",
                                "{item.entry.icon.glyph()}"
                            }
                            span { class: "nav-text", "{item.entry.label}" }
                        }
                    }
                }
            }
            hr { class: "drawer-divider" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ViewportClass;

    fn render(view: SidebarView) -> String {
        let mut dom = VirtualDom::new_with_props(Panel, PanelProps { view });
        dom.rebuild_in_place();
        return dioxus_ssr::render(&dom);

        #[component]
        fn Panel(view: SidebarView) -> Element {
            rsx! {
                SidebarPanel {
                    view,
                    drawer_width: 240.0,
                    on_activate: |_: &'static MenuEntry| {},
                    on_close: |_: ()| {},
                }
            }
        }
    }

    #[test]
    fn desktop_renders_permanent_drawer_only() {
        let html = render(SidebarView::build("/reports", false, ViewportClass::Desktop));
        assert!(html.contains("drawer-permanent"));
        assert!(!html.contains("drawer-modal"));
        assert_eq!(html.matches("nav-button selected").count(), 1);
        assert_eq!(html.matches("nav-list-item").count(), 7);
        assert!(html.contains("width: 240px;"));
    }

    #[test]
    fn open_overlay_is_focusable_with_backdrop() {
        let html = render(SidebarView::build("/alerts", true, ViewportClass::Mobile));
        assert!(html.contains("drawer-modal open"));
        assert!(html.contains("drawer-backdrop"));
        assert!(html.contains("tabindex=\"-1\""));
        assert!(!html.contains("drawer-permanent"));
        assert_eq!(html.matches("nav-button selected").count(), 1);
    }

    #[test]
    fn closed_overlay_stays_mounted_but_hidden() {
        let html = render(SidebarView::build("/alerts", false, ViewportClass::Mobile));
        assert!(html.contains("drawer-modal"));
        assert!(!html.contains("drawer-modal open"));
        assert_eq!(html.matches("nav-list-item").count(), 7);
    }

    #[test]
    fn no_selection_for_unknown_path() {
        let html = render(SidebarView::build("/nowhere", false, ViewportClass::Desktop));
        assert!(!html.contains("nav-button selected"));
        assert!(!html.contains("aria-current"));
    }

    #[test]
    fn identical_inputs_render_identically() {
        let a = render(SidebarView::build("/incidents", true, ViewportClass::Mobile));
        let b = render(SidebarView::build("/incidents", true, ViewportClass::Mobile));
        assert_eq!(a, b);
    }

    #[test]
    fn only_escape_dismisses_overlay() {
        assert!(dismisses_overlay(&Key::Escape));
        assert!(!dismisses_overlay(&Key::Enter));
        assert!(!dismisses_overlay(&Key::Character("q".into())));
    }
}
