use serde::{Deserialize, Serialize};

/// 菜单图标，对应一个字形资源
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum NavIcon {
    Dashboard,
    Download,
    Analytics,
    Warning,
    Security,
    Assessment,
    Settings,
}

impl NavIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Dashboard => "📊",
            NavIcon::Download => "📥",
            NavIcon::Analytics => "📈",
            NavIcon::Warning => "⚠️",
            NavIcon::Security => "🛡️",
            NavIcon::Assessment => "📋",
            NavIcon::Settings => "⚙️",
        }
    }

    /// 用于 CSS class 的名字
    pub fn name(self) -> &'static str {
        match self {
            NavIcon::Dashboard => "dashboard",
            NavIcon::Download => "download",
            NavIcon::Analytics => "analytics",
            NavIcon::Warning => "warning",
            NavIcon::Security => "security",
            NavIcon::Assessment => "assessment",
            NavIcon::Settings => "settings",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MenuEntry {
    pub label: &'static str,
    pub icon: NavIcon,
    pub path: &'static str,
}

pub const MENU_ENTRIES: [MenuEntry; 7] = [
    MenuEntry { label: "Dashboard", icon: NavIcon::Dashboard, path: "/dashboard" },
    MenuEntry { label: "Extractions", icon: NavIcon::Download, path: "/extractions" },
    MenuEntry { label: "Analysis", icon: NavIcon::Analytics, path: "/analysis" },
    MenuEntry { label: "Alerts", icon: NavIcon::Warning, path: "/alerts" },
    MenuEntry { label: "Incidents", icon: NavIcon::Security, path: "/incidents" },
    MenuEntry { label: "Reports", icon: NavIcon::Assessment, path: "/reports" },
    MenuEntry { label: "Settings", icon: NavIcon::Settings, path: "/settings" },
];

/// 当前路径对应的菜单项（精确匹配，可能没有）
pub fn selected_entry(current_path: &str) -> Option<&'static MenuEntry> {
    MENU_ENTRIES.iter().find(|entry| entry.path == current_path)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ViewportClass {
    Desktop,
    Mobile,
}

impl ViewportClass {
    /// 宽度 >= 断点 为桌面端
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width < breakpoint {
            ViewportClass::Mobile
        } else {
            ViewportClass::Desktop
        }
    }
}

// ---------- 配置相关模型 ------------
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub breakpoint_px: f64,
    pub drawer_width_px: f64,
    pub title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: 900.0,
            drawer_width_px: 240.0,
            title: "Security Dashboard".to_string(),
        }
    }
}
