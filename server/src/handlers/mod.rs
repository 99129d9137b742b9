pub mod page_data;
pub mod prelude;

pub mod get_game;
pub mod get_index;
pub mod get_new_game;
pub mod post_add_match;
pub mod post_new_game;
