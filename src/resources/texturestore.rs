use rustc_hash::FxHashMap;

/// Loaded textures keyed by sheet name.
///
/// Generic over the canvas's texture handle so tests can store plain ids.
/// Inserted as a non-send resource: GPU handles must stay on the main thread.
pub struct TextureStore<T> {
    map: FxHashMap<String, T>,
}

impl<T> Default for TextureStore<T> {
    fn default() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }
}

impl<T> TextureStore<T> {
    pub fn insert(&mut self, key: impl Into<String>, texture: T) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.map.get(key)
    }
}
