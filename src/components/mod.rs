pub mod pages;
pub mod shell;
pub mod sidebar;
