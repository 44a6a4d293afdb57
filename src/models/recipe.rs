use crate::config::RecipeConfig;
use crate::error::FetchError;
use crate::fetchers::RecipeApi;
use crate::ingredients::parse_ingredients;
use crate::model::{ParsedIngredient, RecipeDetail};
use log::{debug, info};

/// Direction of a servings change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Servings {
    Inc,
    Dec,
}

/// The recipe currently on display
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub author: String,
    pub img: String,
    pub url: String,
    pub ingredients_raw: Vec<String>,
    pub ingredients: Vec<ParsedIngredient>,
    /// Cooking time in minutes
    pub time: u32,
    /// Always at least 1
    pub servings: u32,
    source_time: Option<u32>,
    source_servings: Option<u32>,
    base_servings: u32,
    base_counts: Vec<Option<f64>>,
}

impl Recipe {
    /// Fetch recipe `id` from the API.
    ///
    /// The returned recipe still needs [`Recipe::prepare`] (or the individual
    /// `parse_ingredients`/`calc_time`/`calc_servings` steps) before display.
    pub async fn fetch_detail(api: &dyn RecipeApi, id: &str) -> Result<Self, FetchError> {
        let detail = api.recipe(id).await?;
        info!("Fetched recipe {} ({})", detail.id, detail.title);
        Ok(Self::from_detail(detail))
    }

    pub fn from_detail(detail: RecipeDetail) -> Self {
        let servings = detail.servings.unwrap_or(1).max(1);
        Recipe {
            id: detail.id,
            title: detail.title,
            author: detail.author,
            img: detail.img,
            url: detail.url,
            ingredients_raw: detail.ingredients,
            ingredients: Vec::new(),
            time: detail.time.unwrap_or(0),
            servings,
            source_time: detail.time,
            source_servings: detail.servings,
            base_servings: servings,
            base_counts: Vec::new(),
        }
    }

    /// Parse ingredients and fill in time and servings
    pub fn prepare(&mut self, config: &RecipeConfig) {
        self.parse_ingredients();
        self.calc_time(config.minutes_per_period, config.ingredients_per_period);
        self.calc_servings(config.default_servings);
    }

    /// Turn the raw ingredient lines into parsed ingredients
    pub fn parse_ingredients(&mut self) {
        self.ingredients = parse_ingredients(&self.ingredients_raw);
        self.base_counts = self.ingredients.iter().map(|i| i.count).collect();
    }

    /// Estimate the cooking time when the API did not provide one:
    /// `minutes_per_period` for every started group of
    /// `ingredients_per_period` ingredients.
    pub fn calc_time(&mut self, minutes_per_period: u32, ingredients_per_period: u32) {
        if let Some(time) = self.source_time {
            self.time = time;
            return;
        }
        let count = self.ingredients_raw.len() as u32;
        let periods = count.div_ceil(ingredients_per_period.max(1));
        self.time = periods * minutes_per_period;
    }

    /// Use `default` servings when the API did not provide them.
    ///
    /// This becomes the base that scaling is computed from.
    pub fn calc_servings(&mut self, default: u32) {
        self.servings = self
            .source_servings
            .filter(|s| *s > 0)
            .unwrap_or(default)
            .max(1);
        self.base_servings = self.servings;
    }

    /// Change servings by one and rescale every ingredient count from its
    /// originally parsed value.
    ///
    /// Callers must not decrease below one serving; a `Dec` at one serving
    /// is ignored.
    pub fn update_servings(&mut self, direction: Servings) {
        let new_servings = match direction {
            Servings::Inc => self.servings + 1,
            Servings::Dec if self.servings > 1 => self.servings - 1,
            Servings::Dec => {
                debug!("Ignoring servings decrease at 1 serving");
                return;
            }
        };

        let ratio = new_servings as f64 / self.base_servings as f64;
        for (ingredient, base) in self.ingredients.iter_mut().zip(&self.base_counts) {
            if let Some(base) = base {
                ingredient.count = Some(base * ratio);
            }
        }
        self.servings = new_servings;
    }

    pub fn base_servings(&self) -> u32 {
        self.base_servings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(ingredients: &[&str]) -> RecipeDetail {
        RecipeDetail {
            id: "47746".to_string(),
            title: "Best Pizza Dough Ever".to_string(),
            author: "101 Cookbooks".to_string(),
            img: "http://img/1.jpg".to_string(),
            url: "http://example.com/pizza".to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            time: None,
            servings: None,
        }
    }

    fn prepared(ingredients: &[&str]) -> Recipe {
        let mut recipe = Recipe::from_detail(detail(ingredients));
        recipe.prepare(&RecipeConfig::default());
        recipe
    }

    #[test]
    fn test_prepare_uses_heuristics() {
        let recipe = prepared(&["1 cup flour", "2 eggs", "salt", "1 tbsp oil"]);
        assert_eq!(recipe.ingredients.len(), 4);
        // 4 ingredients -> 2 periods of 15 minutes
        assert_eq!(recipe.time, 30);
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.base_servings(), 4);
    }

    #[test]
    fn test_source_time_and_servings_win() {
        let mut d = detail(&["1 cup flour"]);
        d.time = Some(90);
        d.servings = Some(6);
        let mut recipe = Recipe::from_detail(d);
        recipe.prepare(&RecipeConfig::default());
        assert_eq!(recipe.time, 90);
        assert_eq!(recipe.servings, 6);
    }

    #[test]
    fn test_calc_time_rounds_up_periods() {
        let mut recipe = Recipe::from_detail(detail(&["a", "b", "c"]));
        recipe.calc_time(15, 3);
        assert_eq!(recipe.time, 15);

        let mut recipe = Recipe::from_detail(detail(&["a", "b", "c", "d", "e", "f", "g"]));
        recipe.calc_time(15, 3);
        assert_eq!(recipe.time, 45);

        let mut recipe = Recipe::from_detail(detail(&[]));
        recipe.calc_time(15, 3);
        assert_eq!(recipe.time, 0);
    }

    #[test]
    fn test_decrease_from_two_servings() {
        let mut recipe = prepared(&["4 cups flour"]);
        recipe.calc_servings(2);
        recipe.update_servings(Servings::Dec);
        assert_eq!(recipe.servings, 1);
        assert_eq!(recipe.ingredients[0].count, Some(2.0));
    }

    #[test]
    fn test_decrease_at_one_serving_is_ignored() {
        let mut recipe = prepared(&["4 cups flour"]);
        recipe.calc_servings(1);
        recipe.update_servings(Servings::Dec);
        assert_eq!(recipe.servings, 1);
        assert_eq!(recipe.ingredients[0].count, Some(4.0));
    }

    #[test]
    fn test_uncounted_ingredients_are_untouched() {
        let mut recipe = prepared(&["salt to taste", "2 eggs"]);
        recipe.update_servings(Servings::Inc);
        assert_eq!(recipe.ingredients[0].count, None);
        assert_eq!(recipe.ingredients[0].ingredient, "salt to taste");
        assert!((recipe.ingredients[1].count.unwrap() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_scaling_is_reversible() {
        let lines = ["1 1/2 cups plain flour", "3 eggs", "1/3 cup sugar", "pinch of salt"];
        for n in 1..=12u32 {
            let mut recipe = prepared(&lines);
            let original: Vec<_> = recipe.ingredients.iter().map(|i| i.count).collect();

            for _ in 0..n {
                recipe.update_servings(Servings::Inc);
            }
            assert_eq!(recipe.servings, 4 + n);
            for _ in 0..n {
                recipe.update_servings(Servings::Dec);
            }
            assert_eq!(recipe.servings, 4);

            for (ingredient, before) in recipe.ingredients.iter().zip(&original) {
                match (ingredient.count, before) {
                    (Some(after), Some(before)) => assert!((after - before).abs() < 1e-9),
                    (after, before) => assert_eq!(after, *before),
                }
            }
        }
    }
}
