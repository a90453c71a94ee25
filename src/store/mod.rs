use std::collections::HashMap;

/// String key-value persistence, the seam in front of the WebView's
/// localStorage. Values survive for whatever lifetime the implementation
/// gives them; the core never assumes durability.
pub trait KeyStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Keys the client persists between sessions
pub mod keys {
    pub const TOUR_COMPLETED: &str = "tour_completed";
    pub const LAST_KNOWN_LOC: &str = "last_known_loc";
    pub const REGISTERED: &str = "registered";
    pub const THEME: &str = "theme";
}

/// In-memory store for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}
