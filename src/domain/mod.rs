pub mod catalog;
pub mod nav;
pub mod profile;
