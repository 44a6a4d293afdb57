mod likes;
mod list;
mod recipe;
mod search;

pub use likes::Likes;
pub use list::ShoppingList;
pub use recipe::{Recipe, Servings};
pub use search::{paginate, Pagination, Search};
