//! Catalog cache
//!
//! Backend catalog lookups (module-scoped reference data) used to live
//! in ambient module state. Here the cache is an explicit value object:
//! the time-to-live is injected at construction and invalidation is an
//! explicit call, so ownership and lifetime are visible at the call
//! site. Each engine instance owns its cache exclusively, so the
//! structure is synchronous.

use serde_json::Value;
use std::collections::HashMap;
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
struct Entry {
	value: Value,
	stored_at: Instant,
}

/// TTL cache for catalog payloads keyed by `(module_id, key)`
#[derive(Debug, Clone)]
pub struct CatalogCache {
	ttl: Duration,
	entries: HashMap<(i64, String), Entry>,
}

impl CatalogCache {
	/// Create a cache with the given time-to-live
	///
	/// # Examples
	///
	/// ```
	/// use std::time::Duration;
	/// use tablero_proxy::CatalogCache;
	///
	/// let mut cache = CatalogCache::new(Duration::from_secs(300));
	/// cache.set(1, "provincias", serde_json::json!(["Madrid"]));
	/// assert!(cache.get(1, "provincias").is_some());
	/// assert!(cache.get(2, "provincias").is_none());
	/// ```
	pub fn new(ttl: Duration) -> Self {
		Self {
			ttl,
			entries: HashMap::new(),
		}
	}

	/// Stores a payload for `(module_id, key)`
	pub fn set(&mut self, module_id: i64, key: impl Into<String>, value: Value) {
		self.entries.insert(
			(module_id, key.into()),
			Entry {
				value,
				stored_at: Instant::now(),
			},
		);
	}

	/// Fetches a payload if present and not expired
	pub fn get(&self, module_id: i64, key: &str) -> Option<&Value> {
		self.get_at(module_id, key, Instant::now())
	}

	// Expiry check against an explicit clock, for deterministic tests.
	fn get_at(&self, module_id: i64, key: &str, now: Instant) -> Option<&Value> {
		let entry = self.entries.get(&(module_id, key.to_string()))?;
		if now.duration_since(entry.stored_at) >= self.ttl {
			return None;
		}
		Some(&entry.value)
	}

	/// Drops one entry
	pub fn invalidate(&mut self, module_id: i64, key: &str) {
		self.entries.remove(&(module_id, key.to_string()));
	}

	/// Drops every entry belonging to a module
	pub fn invalidate_module(&mut self, module_id: i64) {
		self.entries.retain(|(m, _), _| *m != module_id);
	}

	/// Drops everything
	pub fn clear(&mut self) {
		self.entries.clear();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_expired_entry_is_miss() {
		let mut cache = CatalogCache::new(Duration::from_secs(60));
		cache.set(1, "k", Value::from(1));

		let later = Instant::now() + Duration::from_secs(61);
		assert!(cache.get_at(1, "k", later).is_none());
	}

	#[test]
	fn test_fresh_entry_is_hit() {
		let mut cache = CatalogCache::new(Duration::from_secs(60));
		cache.set(1, "k", Value::from(1));
		assert_eq!(cache.get(1, "k"), Some(&Value::from(1)));
	}

	#[test]
	fn test_explicit_invalidation() {
		let mut cache = CatalogCache::new(Duration::from_secs(60));
		cache.set(1, "a", Value::from(1));
		cache.set(1, "b", Value::from(2));
		cache.set(2, "a", Value::from(3));

		cache.invalidate(1, "a");
		assert!(cache.get(1, "a").is_none());
		assert!(cache.get(1, "b").is_some());

		cache.invalidate_module(1);
		assert!(cache.get(1, "b").is_none());
		assert!(cache.get(2, "a").is_some());
	}
}
