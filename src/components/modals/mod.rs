pub mod command_palette;
pub mod error;
pub mod manager;
pub mod overlay;
pub mod theme_selection;

pub use manager::ModalManager;
