//! Application state shared by the controllers.

use crate::models::{Likes, Recipe, Search, ShoppingList};
use log::warn;

/// Identifies one search or recipe fetch.
///
/// Starting a new fetch of the same kind invalidates every older ticket, so
/// a slow response that arrives after a newer one can be recognised and
/// dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Holds at most one live instance of each model.
///
/// [`Controller`](crate::Controller) runs one action at a time through
/// `&mut self`, so its own flows never overlap. The tickets matter to callers
/// driving `AppState` directly with several fetches in flight: only the
/// latest `begin_*` may install its result.
#[derive(Debug, Default)]
pub struct AppState {
    pub search: Option<Search>,
    pub recipe: Option<Recipe>,
    pub list: Option<ShoppingList>,
    pub likes: Option<Likes>,
    search_generation: u64,
    recipe_generation: u64,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_search(&mut self) -> Ticket {
        self.search_generation += 1;
        Ticket(self.search_generation)
    }

    /// Install a finished search unless a newer one was started since
    /// `ticket` was issued. Returns whether it was installed.
    pub fn finish_search(&mut self, ticket: Ticket, search: Search) -> bool {
        if ticket.0 != self.search_generation {
            warn!("Discarding stale results for search {:?}", search.query);
            return false;
        }
        self.search = Some(search);
        true
    }

    pub fn begin_recipe(&mut self) -> Ticket {
        self.recipe_generation += 1;
        Ticket(self.recipe_generation)
    }

    /// Install a fetched recipe unless a newer recipe view was started.
    pub fn finish_recipe(&mut self, ticket: Ticket, recipe: Recipe) -> bool {
        if ticket.0 != self.recipe_generation {
            warn!("Discarding stale recipe {}", recipe.id);
            return false;
        }
        self.recipe = Some(recipe);
        true
    }

    /// Whether `ticket` still belongs to the latest search
    pub fn is_current_search(&self, ticket: Ticket) -> bool {
        ticket.0 == self.search_generation
    }

    pub fn is_current_recipe(&self, ticket: Ticket) -> bool {
        ticket.0 == self.recipe_generation
    }

    /// The shopping list, created on first use
    pub fn list_mut(&mut self) -> &mut ShoppingList {
        self.list.get_or_insert_with(ShoppingList::new)
    }

    /// The likes, created empty on first use
    pub fn likes_mut(&mut self) -> &mut Likes {
        self.likes.get_or_insert_with(Likes::new)
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.as_ref().is_some_and(|likes| likes.is_liked(id))
    }
}
