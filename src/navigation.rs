//! 侧边栏的纯逻辑部分：视图模型与菜单项激活。
//!
//! 这里不依赖 dioxus，路由和视口都通过 trait 注入，方便在测试里替换。

use tracing::debug;

use crate::models::{MenuEntry, ViewportClass, MENU_ENTRIES};

/// 路由协作方
pub trait PathNavigator {
    fn navigate_to(&self, path: &str);
    fn current_path(&self) -> String;
}

/// 视口分类，在调用时取最新值
pub trait ViewportClassifier {
    fn classify(&self) -> ViewportClass;
}

/// 激活菜单项：总是导航，移动端再请求关闭抽屉
pub fn activate_entry<N, V, F>(entry: &MenuEntry, navigator: &N, viewport: &V, on_close: F)
where
    N: PathNavigator + ?Sized,
    V: ViewportClassifier + ?Sized,
    F: FnOnce(),
{
    debug!(path = entry.path, "navigate");
    navigator.navigate_to(entry.path);
    if viewport.classify() == ViewportClass::Mobile {
        on_close();
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct NavItemView {
    pub entry: &'static MenuEntry,
    pub selected: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DrawerVariant {
    Permanent,
    Temporary,
}

#[derive(Clone, PartialEq, Debug)]
pub struct DrawerView {
    pub variant: DrawerVariant,
    pub visible: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct SidebarView {
    pub items: Vec<NavItemView>,
    /// 同一时刻只会渲染一种抽屉
    pub drawer: DrawerView,
}

pub fn nav_items(current_path: &str) -> Vec<NavItemView> {
    MENU_ENTRIES
        .iter()
        .map(|entry| NavItemView {
            entry,
            selected: entry.path == current_path,
        })
        .collect()
}

impl SidebarView {
    pub fn build(current_path: &str, open: bool, class: ViewportClass) -> Self {
        let drawer = match class {
            ViewportClass::Desktop => DrawerView {
                variant: DrawerVariant::Permanent,
                visible: true,
            },
            ViewportClass::Mobile => DrawerView {
                variant: DrawerVariant::Temporary,
                visible: open,
            },
        };
        Self {
            items: nav_items(current_path),
            drawer,
        }
    }

    pub fn overlay_visible(&self) -> bool {
        self.drawer.variant == DrawerVariant::Temporary && self.drawer.visible
    }

    pub fn permanent_visible(&self) -> bool {
        self.drawer.variant == DrawerVariant::Permanent
    }
}
