use super::{LoadingTarget, Render};
use crate::ingredients::format_count;
use crate::model::{LikedRecipe, RecipeSummary, ShoppingListItem};
use crate::models::{paginate, Pagination, Recipe};
use log::warn;
use std::fmt;
use std::io::{self, Write};

/// Line-oriented renderer for the interactive CLI
pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    page_size: usize,
    selected: Option<String>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn stdout(page_size: usize) -> Self {
        Self::new(io::stdout(), page_size)
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, page_size: usize) -> Self {
        Self {
            out,
            page_size,
            selected: None,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.out, "{}", args) {
            warn!("Failed to write to terminal: {}", e);
        }
    }

    fn ingredient_lines(&mut self, recipe: &Recipe) {
        for ingredient in &recipe.ingredients {
            let count = ingredient.count.map(format_count).unwrap_or_default();
            let text = [count.as_str(), ingredient.unit.as_str(), ingredient.ingredient.as_str()]
                .iter()
                .filter(|part| !part.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            self.line(format_args!("  - {}", text));
        }
    }
}

impl<W: Write> Render for TerminalRenderer<W> {
    fn render_search_results(&mut self, results: &[RecipeSummary], page: usize) {
        let visible = paginate(results, page, self.page_size);
        if visible.is_empty() {
            self.line(format_args!("No recipes found."));
            return;
        }
        for summary in visible {
            let marker = if self.selected.as_deref() == Some(summary.id.as_str()) {
                '*'
            } else {
                ' '
            };
            self.line(format_args!(
                "{} [{}] {} ({})",
                marker, summary.id, summary.title, summary.author
            ));
        }
        let pagination = Pagination::new(page, results.len(), self.page_size);
        let prev = if pagination.has_prev() { "< prev  " } else { "" };
        let next = if pagination.has_next() { "  next >" } else { "" };
        self.line(format_args!(
            "{}page {}/{}{}",
            prev, pagination.page, pagination.pages, next
        ));
    }

    // The selection outlives a redraw so paging back keeps the marker
    fn clear_results(&mut self) {}

    fn highlight_selected(&mut self, id: &str) {
        self.selected = Some(id.to_string());
    }

    fn render_recipe(&mut self, recipe: &Recipe, is_liked: bool) {
        let heart = if is_liked { "♥" } else { "♡" };
        self.line(format_args!("{} {} {}", heart, recipe.title, recipe.author));
        self.line(format_args!(
            "{} minutes, {} servings",
            recipe.time, recipe.servings
        ));
        self.ingredient_lines(recipe);
        if !recipe.url.is_empty() {
            self.line(format_args!("Directions: {}", recipe.url));
        }
    }

    fn clear_recipe(&mut self) {}

    fn update_servings(&mut self, recipe: &Recipe) {
        self.line(format_args!("{} servings", recipe.servings));
        self.ingredient_lines(recipe);
    }

    fn render_shopping_item(&mut self, item: &ShoppingListItem) {
        self.line(format_args!(
            "+ [{}] {} {} {}",
            item.id,
            format_count(item.count),
            item.unit,
            item.ingredient
        ));
    }

    fn remove_shopping_item(&mut self, id: &str) {
        self.line(format_args!("- [{}]", id));
    }

    fn render_like(&mut self, like: &LikedRecipe) {
        self.line(format_args!("♥ [{}] {} ({})", like.id, like.title, like.author));
    }

    fn remove_like(&mut self, id: &str) {
        self.line(format_args!("♡ [{}] removed from likes", id));
    }

    fn toggle_like_button(&mut self, is_liked: bool) {
        let state = if is_liked { "liked" } else { "not liked" };
        self.line(format_args!("Recipe {}", state));
    }

    fn toggle_like_menu(&mut self, count: usize) {
        if count > 0 {
            self.line(format_args!("{} liked recipe(s)", count));
        }
    }

    fn show_loading(&mut self, target: LoadingTarget) {
        let what = match target {
            LoadingTarget::SearchResults => "Searching",
            LoadingTarget::Recipe => "Loading recipe",
        };
        self.line(format_args!("{}...", what));
    }

    fn clear_loading(&mut self, _target: LoadingTarget) {}

    fn show_error(&mut self, message: &str) {
        self.line(format_args!("Error: {}", message));
    }
}
