pub mod args;
pub mod select;

pub use args::{card_file_name, Args, LayoutVariant};
pub use select::{select_player, Selection};
