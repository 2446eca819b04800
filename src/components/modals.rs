pub mod command_palette;
pub mod helpers;
pub mod item;

pub use command_palette::{CommandPaletteModal, PaletteLayout};
pub use item::{item_modal_rect, ItemContent, ItemModal};
