use crate::error::PlannerError;
use crate::model::LikedRecipe;
use crate::storage::KeyValueStore;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Bookmarked recipes, persisted as `{ "likes": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Likes {
    likes: Vec<LikedRecipe>,
}

impl Likes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bookmark a recipe. An id that is already liked is not added again;
    /// the existing record is returned instead.
    pub fn add_like(
        &mut self,
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        img: impl Into<String>,
    ) -> LikedRecipe {
        let id = id.into();
        if let Some(existing) = self.likes.iter().find(|like| like.id == id) {
            debug!("Recipe {} already liked", id);
            return existing.clone();
        }
        let like = LikedRecipe {
            id,
            title: title.into(),
            author: author.into(),
            img: img.into(),
        };
        self.likes.push(like.clone());
        like
    }

    /// Remove the bookmark for `id`; unknown ids are ignored
    pub fn delete_like(&mut self, id: &str) -> Option<LikedRecipe> {
        let index = self.likes.iter().position(|like| like.id == id)?;
        Some(self.likes.remove(index))
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.likes.iter().any(|like| like.id == id)
    }

    pub fn num_likes(&self) -> usize {
        self.likes.len()
    }

    pub fn likes(&self) -> &[LikedRecipe] {
        &self.likes
    }

    /// Write the whole collection to `key`
    pub fn persist(&self, store: &mut dyn KeyValueStore, key: &str) -> Result<(), PlannerError> {
        let bytes = serde_json::to_vec(self)?;
        store.set(key, &bytes)?;
        debug!("Persisted {} likes", self.likes.len());
        Ok(())
    }

    /// Read the collection stored under `key`. A missing key yields an
    /// empty collection.
    pub fn restore(store: &dyn KeyValueStore, key: &str) -> Result<Self, PlannerError> {
        let Some(bytes) = store.get(key)? else {
            return Ok(Self::new());
        };
        let stored: Likes = serde_json::from_slice(&bytes)?;

        // Keep the one-entry-per-id rule even for hand-edited data
        let mut likes = Self::new();
        for like in stored.likes {
            likes.add_like(like.id, like.title, like.author, like.img);
        }
        info!("Restored {} likes", likes.num_likes());
        Ok(likes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn sample() -> Likes {
        let mut likes = Likes::new();
        likes.add_like("47746", "Best Pizza Dough Ever", "101 Cookbooks", "http://img/1.jpg");
        likes.add_like("54454", "Deep Dish Pizza", "Closet Cooking", "http://img/2.jpg");
        likes
    }

    #[test]
    fn test_is_liked_follows_add_and_delete() {
        let mut likes = Likes::new();
        assert!(!likes.is_liked("1"));
        likes.add_like("1", "Soup", "Me", "");
        assert!(likes.is_liked("1"));
        likes.delete_like("1");
        assert!(!likes.is_liked("1"));
    }

    #[test]
    fn test_add_like_twice_keeps_one_entry() {
        let mut likes = Likes::new();
        let first = likes.add_like("1", "Soup", "Me", "");
        let second = likes.add_like("1", "Other title", "Someone", "x");
        assert_eq!(likes.num_likes(), 1);
        assert_eq!(first, second);
        assert_eq!(likes.likes()[0].title, "Soup");
    }

    #[test]
    fn test_delete_unknown_is_noop() {
        let mut likes = sample();
        assert!(likes.delete_like("missing").is_none());
        assert_eq!(likes.num_likes(), 2);
    }

    #[test]
    fn test_persist_then_restore() {
        let mut store = MemoryStore::new();
        let likes = sample();
        likes.persist(&mut store, "likes").unwrap();

        let restored = Likes::restore(&store, "likes").unwrap();
        assert_eq!(restored, likes);
    }

    #[test]
    fn test_persisted_layout() {
        let mut store = MemoryStore::new();
        sample().persist(&mut store, "likes").unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&store.get("likes").unwrap().unwrap()).unwrap();
        let entries = raw["likes"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["id"], "47746");
        assert_eq!(entries[0]["author"], "101 Cookbooks");
        assert_eq!(entries[1]["img"], "http://img/2.jpg");
    }

    #[test]
    fn test_restore_missing_key_is_empty() {
        let store = MemoryStore::new();
        let likes = Likes::restore(&store, "likes").unwrap();
        assert_eq!(likes.num_likes(), 0);
    }

    #[test]
    fn test_restore_corrupt_data_is_error() {
        let mut store = MemoryStore::new();
        store.set("likes", b"not json").unwrap();
        assert!(matches!(
            Likes::restore(&store, "likes"),
            Err(PlannerError::Serialization(_))
        ));
    }

    #[test]
    fn test_restore_drops_duplicate_ids() {
        let mut store = MemoryStore::new();
        store
            .set(
                "likes",
                br#"{"likes":[{"id":"1","title":"A","author":"x","img":""},{"id":"1","title":"B","author":"y","img":""}]}"#,
            )
            .unwrap();
        let likes = Likes::restore(&store, "likes").unwrap();
        assert_eq!(likes.num_likes(), 1);
        assert_eq!(likes.likes()[0].title, "A");
    }
}
