//! Controllers turning user actions into model updates and render calls.

use crate::config::PlannerConfig;
use crate::fetchers::RecipeApi;
use crate::models::{Likes, Recipe, Search, Servings};
use crate::render::{LoadingTarget, Render};
use crate::state::AppState;
use crate::storage::KeyValueStore;
use log::{debug, error, info, warn};

const SEARCH_FAILED: &str = "Something went wrong with the search.";
const RECIPE_FAILED: &str = "Error processing recipe.";
const LIKES_NOT_SAVED: &str = "Could not save your likes.";

/// Everything the UI layer can ask for
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Application start: restore likes, then show the recipe in `fragment`
    Load { fragment: String },
    Search { query: String },
    GoToPage(usize),
    /// The address fragment changed to `#<recipe id>`
    FragmentChanged(String),
    IncreaseServings,
    DecreaseServings,
    /// Add every ingredient of the current recipe to the shopping list
    AddToList,
    DeleteListItem { id: String },
    /// Raw count typed by the user for a shopping list item
    UpdateListCount { id: String, value: String },
    ToggleLike,
}

/// Owns the application state and routes actions to the matching controller.
///
/// Failures are reported through [`Render::show_error`] and never returned:
/// each action either completes or leaves the previous state in place.
pub struct Controller<A, R, S> {
    api: A,
    renderer: R,
    store: S,
    config: PlannerConfig,
    state: AppState,
    page: usize,
}

impl<A, R, S> Controller<A, R, S>
where
    A: RecipeApi,
    R: Render,
    S: KeyValueStore,
{
    pub fn new(api: A, renderer: R, store: S, config: PlannerConfig) -> Self {
        Self {
            api,
            renderer,
            store,
            config,
            state: AppState::new(),
            page: 1,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current page of the search results
    pub fn page(&self) -> usize {
        self.page
    }

    pub async fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {:?}", action);
        match action {
            Action::Load { fragment } => {
                self.restore_likes();
                self.control_recipe(&fragment).await;
            }
            Action::Search { query } => self.control_search(&query).await,
            Action::GoToPage(page) => self.go_to_page(page),
            Action::FragmentChanged(fragment) => self.control_recipe(&fragment).await,
            Action::IncreaseServings => self.control_servings(Servings::Inc),
            Action::DecreaseServings => self.control_servings(Servings::Dec),
            Action::AddToList => self.control_list(),
            Action::DeleteListItem { id } => self.delete_list_item(&id),
            Action::UpdateListCount { id, value } => self.update_list_count(&id, &value),
            Action::ToggleLike => self.control_like(),
        }
    }

    async fn control_search(&mut self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }

        let ticket = self.state.begin_search();
        self.renderer.show_loading(LoadingTarget::SearchResults);

        let result = Search::perform_search(&self.api, query).await;
        self.renderer.clear_loading(LoadingTarget::SearchResults);

        match result {
            Ok(search) => {
                if self.state.finish_search(ticket, search) {
                    self.page = 1;
                    self.render_results();
                }
            }
            Err(e) => {
                error!("Search {:?} failed: {}", query, e);
                if self.state.is_current_search(ticket) {
                    self.renderer.show_error(SEARCH_FAILED);
                }
            }
        }
    }

    fn go_to_page(&mut self, page: usize) {
        let Some(search) = &self.state.search else {
            debug!("No search to paginate");
            return;
        };
        let pages = search
            .pagination(page, self.config.search.page_size)
            .pages
            .max(1);
        self.page = page.clamp(1, pages);
        self.render_results();
    }

    fn render_results(&mut self) {
        if let Some(search) = &self.state.search {
            self.renderer.clear_results();
            self.renderer.render_search_results(&search.results, self.page);
            if let Some(recipe) = &self.state.recipe {
                self.renderer.highlight_selected(&recipe.id);
            }
        }
    }

    async fn control_recipe(&mut self, fragment: &str) {
        let id = fragment.trim().trim_start_matches('#');
        if id.is_empty() {
            return;
        }

        let ticket = self.state.begin_recipe();
        self.renderer.show_loading(LoadingTarget::Recipe);

        let result = Recipe::fetch_detail(&self.api, id).await;
        self.renderer.clear_loading(LoadingTarget::Recipe);

        let mut recipe = match result {
            Ok(recipe) => recipe,
            Err(e) => {
                error!("Loading recipe {} failed: {}", id, e);
                if self.state.is_current_recipe(ticket) {
                    self.renderer.show_error(RECIPE_FAILED);
                }
                return;
            }
        };
        recipe.prepare(&self.config.recipe);

        if !self.state.finish_recipe(ticket, recipe) {
            return;
        }

        let in_results = self
            .state
            .search
            .as_ref()
            .is_some_and(|s| s.results.iter().any(|r| r.id == id));
        if in_results {
            self.renderer.highlight_selected(id);
        }

        self.ensure_likes();
        if let Some(recipe) = &self.state.recipe {
            let liked = self.state.is_liked(&recipe.id);
            self.renderer.clear_recipe();
            self.renderer.render_recipe(recipe, liked);
        }
    }

    fn control_servings(&mut self, direction: Servings) {
        let Some(recipe) = self.state.recipe.as_mut() else {
            debug!("No recipe to scale");
            return;
        };
        if direction == Servings::Dec && recipe.servings <= 1 {
            return;
        }
        recipe.update_servings(direction);
        self.renderer.update_servings(recipe);
    }

    fn control_list(&mut self) {
        let Some(recipe) = &self.state.recipe else {
            warn!("No recipe to add to the shopping list");
            return;
        };
        let ingredients = recipe.ingredients.clone();

        let list = self.state.list_mut();
        for ingredient in ingredients {
            let item = list.add_item(
                ingredient.count.unwrap_or(1.0),
                ingredient.unit,
                ingredient.ingredient,
            );
            self.renderer.render_shopping_item(&item);
        }
        info!("Shopping list now has {} items", list.len());
    }

    fn delete_list_item(&mut self, id: &str) {
        let removed = self
            .state
            .list
            .as_mut()
            .and_then(|list| list.delete_item(id));
        if removed.is_some() {
            self.renderer.remove_shopping_item(id);
        }
    }

    /// Non-positive or unparseable counts remove the item instead.
    fn update_list_count(&mut self, id: &str, value: &str) {
        let count = value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite() && *c > 0.0);

        match count {
            Some(count) => {
                if let Some(list) = self.state.list.as_mut() {
                    if let Err(e) = list.update_count(id, count) {
                        warn!("Rejected count for {}: {}", id, e);
                    }
                }
            }
            None => {
                debug!("Count {:?} for {} is not positive, deleting", value, id);
                self.delete_list_item(id);
            }
        }
    }

    fn control_like(&mut self) {
        let Some(recipe) = &self.state.recipe else {
            warn!("No recipe to like");
            return;
        };
        let id = recipe.id.clone();
        let (title, author, img) = (recipe.title.clone(), recipe.author.clone(), recipe.img.clone());

        self.ensure_likes();
        let likes = self.state.likes_mut();
        if likes.is_liked(&id) {
            likes.delete_like(&id);
            self.renderer.toggle_like_button(false);
            self.renderer.remove_like(&id);
        } else {
            let like = likes.add_like(id, title, author, img);
            self.renderer.toggle_like_button(true);
            self.renderer.render_like(&like);
        }

        let count = likes.num_likes();
        if let Err(e) = likes.persist(&mut self.store, &self.config.storage.likes_key) {
            error!("Persisting likes failed: {}", e);
            self.renderer.show_error(LIKES_NOT_SAVED);
        }
        self.renderer.toggle_like_menu(count);
    }

    /// Restore the likes from the store the first time they are needed, so
    /// a like toggled before `Action::Load` never overwrites saved ones.
    fn ensure_likes(&mut self) {
        if self.state.likes.is_none() {
            self.state.likes = Some(self.stored_likes());
        }
    }

    fn stored_likes(&self) -> Likes {
        match Likes::restore(&self.store, &self.config.storage.likes_key) {
            Ok(likes) => likes,
            Err(e) => {
                warn!("Could not restore likes, starting empty: {}", e);
                Likes::new()
            }
        }
    }

    fn restore_likes(&mut self) {
        let likes = self.stored_likes();

        self.renderer.toggle_like_menu(likes.num_likes());
        for like in likes.likes() {
            self.renderer.render_like(like);
        }
        self.state.likes = Some(likes);
    }
}
