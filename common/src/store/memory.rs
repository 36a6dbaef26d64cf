use std::collections::HashMap;

use super::{StorageBackend, StoreError};

/// In-memory backend with an optional byte capacity, standing in for the
/// browser's `localStorage` in native tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    capacity: Option<usize>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// A backend that refuses writes once keys plus values would exceed
    /// `capacity` bytes, the way a full `localStorage` does.
    pub fn with_capacity_bytes(capacity: usize) -> Self {
        MemoryBackend { entries: HashMap::new(), capacity: Some(capacity) }
    }

    fn used_excluding(&self, key: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != key)
            .map(|(k, v)| k.len() + v.len())
            .sum()
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        if let Some(capacity) = self.capacity {
            if self.used_excluding(key) + key.len() + value.len() > capacity {
                return Err(StoreError::QuotaExceeded);
            }
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_backend_accepts_anything() {
        let mut backend = MemoryBackend::new();
        backend.set("k", &"x".repeat(100_000)).unwrap();
        assert_eq!(backend.get("k").unwrap().map(|v| v.len()), Some(100_000));
    }

    #[test]
    fn test_overwriting_a_key_releases_its_old_bytes() {
        let mut backend = MemoryBackend::with_capacity_bytes(20);
        backend.set("k", &"a".repeat(19)).unwrap();
        backend.set("k", &"b".repeat(19)).unwrap();
        assert!(matches!(
            backend.set("other", "x"),
            Err(StoreError::QuotaExceeded)
        ));
    }

    #[test]
    fn test_rejected_write_leaves_old_value() {
        let mut backend = MemoryBackend::with_capacity_bytes(10);
        backend.set("k", "small").unwrap();
        assert!(backend.set("k", &"x".repeat(50)).is_err());
        assert_eq!(backend.get("k").unwrap().as_deref(), Some("small"));
    }
}
