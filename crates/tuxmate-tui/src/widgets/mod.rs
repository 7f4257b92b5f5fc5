//! Custom widget components

mod aur_card;
mod catalog_list;
mod command_bar;
mod header;
pub mod modal_overlay;
mod preview;
mod search_input;

pub use aur_card::AurPromptCard;
pub use catalog_list::CatalogList;
pub use command_bar::CommandBar;
pub use header::MainHeader;
pub use preview::ScriptPreview;
pub use search_input::SearchInput;
