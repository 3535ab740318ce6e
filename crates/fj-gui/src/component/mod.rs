//! Reusable view components.

mod banner;
mod category_bar;
mod recipe_card;
mod recipe_modal;
mod search_box;

pub use banner::error_banner;
pub use category_bar::{CategoryChip, category_bar};
pub use recipe_card::RecipeCard;
pub use recipe_modal::recipe_modal;
pub use search_box::search_box;
