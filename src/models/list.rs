use crate::error::PlannerError;
use crate::model::ShoppingListItem;
use log::debug;
use uuid::Uuid;

/// Shopping list kept for the whole session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShoppingList {
    items: Vec<ShoppingListItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item and return it so it can be rendered directly.
    pub fn add_item(
        &mut self,
        count: f64,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> ShoppingListItem {
        let item = ShoppingListItem {
            id: Uuid::new_v4().to_string(),
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        };
        self.items.push(item.clone());
        item
    }

    /// Remove the item with `id`. Unknown ids are ignored.
    pub fn delete_item(&mut self, id: &str) -> Option<ShoppingListItem> {
        let index = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(index))
    }

    /// Replace the count of item `id`.
    ///
    /// `count` must be positive; deciding what to do with anything else is
    /// up to the caller. Returns whether an item was updated.
    pub fn update_count(&mut self, id: &str, count: f64) -> Result<bool, PlannerError> {
        if !(count.is_finite() && count > 0.0) {
            return Err(PlannerError::Validation(format!(
                "count must be a positive number, got {}",
                count
            )));
        }
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.count = count;
                Ok(true)
            }
            None => {
                debug!("No shopping list item {}", id);
                Ok(false)
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&ShoppingListItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[ShoppingListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
