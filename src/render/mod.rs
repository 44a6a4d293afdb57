mod terminal;

pub use terminal::TerminalRenderer;

use crate::model::{LikedRecipe, RecipeSummary, ShoppingListItem};
use crate::models::Recipe;

/// Area of the screen a loading indicator belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingTarget {
    SearchResults,
    Recipe,
}

/// Sink for everything the controllers want shown to the user.
///
/// Implementations only display; controllers never read anything back.
pub trait Render {
    /// Show `page` (1-based) of `results`
    fn render_search_results(&mut self, results: &[RecipeSummary], page: usize);
    fn clear_results(&mut self);
    fn highlight_selected(&mut self, id: &str);

    fn render_recipe(&mut self, recipe: &Recipe, is_liked: bool);
    fn clear_recipe(&mut self);
    /// Refresh servings and ingredient counts of the recipe on display
    fn update_servings(&mut self, recipe: &Recipe);

    fn render_shopping_item(&mut self, item: &ShoppingListItem);
    fn remove_shopping_item(&mut self, id: &str);

    fn render_like(&mut self, like: &LikedRecipe);
    fn remove_like(&mut self, id: &str);
    fn toggle_like_button(&mut self, is_liked: bool);
    /// The likes menu is only shown while `count > 0`
    fn toggle_like_menu(&mut self, count: usize);

    fn show_loading(&mut self, target: LoadingTarget);
    fn clear_loading(&mut self, target: LoadingTarget);

    /// Report a failed action to the user
    fn show_error(&mut self, message: &str);
}
