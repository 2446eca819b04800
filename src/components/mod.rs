pub mod back_to_top;
pub mod field;
pub mod footer;
pub mod header;
pub mod modals;
pub mod sidebar;
pub mod tabs;
pub mod toast;
pub mod views;
