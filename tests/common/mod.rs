#![allow(dead_code)]

use async_trait::async_trait;
use recipe_planner::{
    FetchError, LikedRecipe, LoadingTarget, Recipe, RecipeApi, RecipeDetail, RecipeSummary,
    Render, ShoppingListItem,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Everything a controller asked the renderer to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SearchResults { ids: Vec<String>, page: usize },
    ClearResults,
    Highlight(String),
    Recipe { id: String, servings: u32, liked: bool },
    ClearRecipe,
    Servings { servings: u32, counts: Vec<Option<f64>> },
    ShoppingItem(ShoppingListItem),
    RemoveShoppingItem(String),
    Like(LikedRecipe),
    RemoveLike(String),
    LikeButton(bool),
    LikeMenu(usize),
    Loading(LoadingTarget),
    ClearLoading(LoadingTarget),
    Error(String),
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<Event>,
}

impl RecordingRenderer {
    pub fn errors(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, Event::Error(_)))
            .count()
    }

    pub fn take(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}

impl Render for RecordingRenderer {
    fn render_search_results(&mut self, results: &[RecipeSummary], page: usize) {
        self.events.push(Event::SearchResults {
            ids: results.iter().map(|r| r.id.clone()).collect(),
            page,
        });
    }

    fn clear_results(&mut self) {
        self.events.push(Event::ClearResults);
    }

    fn highlight_selected(&mut self, id: &str) {
        self.events.push(Event::Highlight(id.to_string()));
    }

    fn render_recipe(&mut self, recipe: &Recipe, is_liked: bool) {
        self.events.push(Event::Recipe {
            id: recipe.id.clone(),
            servings: recipe.servings,
            liked: is_liked,
        });
    }

    fn clear_recipe(&mut self) {
        self.events.push(Event::ClearRecipe);
    }

    fn update_servings(&mut self, recipe: &Recipe) {
        self.events.push(Event::Servings {
            servings: recipe.servings,
            counts: recipe.ingredients.iter().map(|i| i.count).collect(),
        });
    }

    fn render_shopping_item(&mut self, item: &ShoppingListItem) {
        self.events.push(Event::ShoppingItem(item.clone()));
    }

    fn remove_shopping_item(&mut self, id: &str) {
        self.events.push(Event::RemoveShoppingItem(id.to_string()));
    }

    fn render_like(&mut self, like: &LikedRecipe) {
        self.events.push(Event::Like(like.clone()));
    }

    fn remove_like(&mut self, id: &str) {
        self.events.push(Event::RemoveLike(id.to_string()));
    }

    fn toggle_like_button(&mut self, is_liked: bool) {
        self.events.push(Event::LikeButton(is_liked));
    }

    fn toggle_like_menu(&mut self, count: usize) {
        self.events.push(Event::LikeMenu(count));
    }

    fn show_loading(&mut self, target: LoadingTarget) {
        self.events.push(Event::Loading(target));
    }

    fn clear_loading(&mut self, target: LoadingTarget) {
        self.events.push(Event::ClearLoading(target));
    }

    fn show_error(&mut self, message: &str) {
        self.events.push(Event::Error(message.to_string()));
    }
}

/// In-process recipe API with canned data
#[derive(Default)]
pub struct FakeApi {
    pub searches: HashMap<String, Vec<RecipeSummary>>,
    pub recipes: HashMap<String, RecipeDetail>,
    pub calls: AtomicUsize,
}

impl FakeApi {
    pub fn with_pizza() -> Self {
        let mut api = FakeApi::default();
        api.searches.insert(
            "pizza".to_string(),
            (1..=23).map(|i| summary(&format!("p{}", i))).collect(),
        );
        api.recipes.insert(
            "p1".to_string(),
            RecipeDetail {
                id: "p1".to_string(),
                title: "Deep Dish Pizza".to_string(),
                author: "Closet Cooking".to_string(),
                img: "http://img/p1.jpg".to_string(),
                url: "http://example.com/p1".to_string(),
                ingredients: vec![
                    "1 1/2 cups plain flour".to_string(),
                    "2 tablespoons olive oil".to_string(),
                    "salt to taste".to_string(),
                ],
                time: None,
                servings: None,
            },
        );
        api.recipes.insert(
            "p2".to_string(),
            RecipeDetail {
                id: "p2".to_string(),
                title: "Pizza Soup".to_string(),
                author: "Me".to_string(),
                ingredients: vec!["4 cups stock".to_string()],
                servings: Some(2),
                ..Default::default()
            },
        );
        api
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn summary(id: &str) -> RecipeSummary {
    RecipeSummary {
        id: id.to_string(),
        title: format!("Recipe {}", id),
        author: "Closet Cooking".to_string(),
        img: String::new(),
    }
}

#[async_trait]
impl RecipeApi for FakeApi {
    async fn search(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.searches
            .get(query)
            .cloned()
            .ok_or_else(|| FetchError::Malformed(format!("no results for {}", query)))
    }

    async fn recipe(&self, id: &str) -> Result<RecipeDetail, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recipes.get(id).cloned().ok_or(FetchError::Status(404))
    }
}
