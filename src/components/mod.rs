pub mod donate;
pub mod footer;
pub mod header;
pub mod modals;
