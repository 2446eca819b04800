pub mod navigation;
pub mod pages;
pub mod palette;
pub mod ui;
