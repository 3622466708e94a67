use super::AppState;
use crate::models::{Category, FavoriteEntry, FavoriteMeta, RecipeKey};
use crate::storage::KeyValueStore;

impl<S: KeyValueStore> AppState<S> {
    /// Favorites in the order they were saved.
    pub fn favorites(&self) -> &[FavoriteEntry] {
        self.favorites.get()
    }

    /// Favorites of one category, or all of them for `None`.
    pub fn favorites_in(&self, category: Option<Category>) -> Vec<&FavoriteEntry> {
        self.favorites()
            .iter()
            .filter(|entry| category.map_or(true, |c| entry.category == c))
            .collect()
    }

    pub fn is_favorite(&self, key: &RecipeKey) -> bool {
        self.favorites().iter().any(|entry| &entry.key == key)
    }

    /// Removes the favorite under `key` if present, otherwise appends one
    /// built from `meta`. Returns whether `key` is a favorite afterwards.
    pub fn toggle_favorite(&mut self, key: &RecipeKey, meta: FavoriteMeta) -> bool {
        let now_favorite = self.favorites.update(|favorites| {
            match favorites.iter().position(|entry| &entry.key == key) {
                Some(idx) => {
                    favorites.remove(idx);
                    false
                }
                None => {
                    favorites.push(FavoriteEntry::new(key.clone(), meta));
                    true
                }
            }
        });
        tracing::debug!("Favorite {} -> {}", key, now_favorite);
        now_favorite
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Category, FavoriteMeta, RecipeKey};
    use crate::state::AppState;
    use crate::storage::{MemoryStore, PersistentStore};

    fn state() -> (AppState<MemoryStore>, MemoryStore) {
        let backend = MemoryStore::new();
        (AppState::load(PersistentStore::new(backend.clone())), backend)
    }

    fn nasi_goreng() -> FavoriteMeta {
        FavoriteMeta {
            id: 12,
            name: "Nasi Goreng".into(),
            image_url: "x.jpg".into(),
            category: Category::Food,
        }
    }

    fn es_doger() -> FavoriteMeta {
        FavoriteMeta {
            id: 5,
            name: "Es Doger".into(),
            image_url: "doger.jpg".into(),
            category: Category::Drink,
        }
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (mut state, _) = state();
        let key = nasi_goreng().key();

        assert!(state.toggle_favorite(&key, nasi_goreng()));
        assert!(state.is_favorite(&key));
        assert_eq!(state.favorites().len(), 1);

        assert!(!state.toggle_favorite(&key, nasi_goreng()));
        assert!(!state.is_favorite(&key));
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn test_double_toggle_restores_previous_favorites() {
        let (mut state, _) = state();
        state.toggle_favorite(&es_doger().key(), es_doger());
        let before = state.favorites().to_vec();

        let key = nasi_goreng().key();
        state.toggle_favorite(&key, nasi_goreng());
        state.toggle_favorite(&key, nasi_goreng());

        assert_eq!(state.favorites(), before.as_slice());
    }

    #[test]
    fn test_toggle_parity() {
        let (mut state, _) = state();
        let key = RecipeKey::new(Category::Food, 12);

        for n in 1..=6 {
            state.toggle_favorite(&key, nasi_goreng());
            assert_eq!(state.is_favorite(&key), n % 2 == 1, "after {} toggles", n);
        }
    }

    #[test]
    fn test_favorites_keep_insertion_order() {
        let (mut state, _) = state();
        state.toggle_favorite(&nasi_goreng().key(), nasi_goreng());
        state.toggle_favorite(&es_doger().key(), es_doger());

        let keys: Vec<_> = state.favorites().iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["makanan-12", "minuman-5"]);
    }

    #[test]
    fn test_favorite_survives_reload() {
        let (mut state, backend) = state();
        let key: RecipeKey = "makanan-12".parse().unwrap();
        state.toggle_favorite(&key, nasi_goreng());

        let reloaded = AppState::load(PersistentStore::new(backend));
        let favorites = reloaded.favorites();
        assert_eq!(favorites.len(), 1);
        assert_eq!(favorites[0].key.as_str(), "makanan-12");
        assert_eq!(favorites[0].name, "Nasi Goreng");
        assert_eq!(favorites[0].category, Category::Food);
        assert!(reloaded.is_favorite(&key));
    }

    #[test]
    fn test_favorites_in_category() {
        let (mut state, _) = state();
        state.toggle_favorite(&nasi_goreng().key(), nasi_goreng());
        state.toggle_favorite(&es_doger().key(), es_doger());

        assert_eq!(state.favorites_in(None).len(), 2);
        let drinks = state.favorites_in(Some(Category::Drink));
        assert_eq!(drinks.len(), 1);
        assert_eq!(drinks[0].name, "Es Doger");
    }
}
