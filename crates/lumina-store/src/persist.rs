//! # Snapshot Persistence
//!
//! Durable storage for the application snapshot: one named JSON blob.
//!
//! ## Durability Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Persistence Boundary                                 │
//! │                                                                         │
//! │  Startup:   load-if-present, else defaults. One shot, no retries:      │
//! │             the medium is local.                                        │
//! │                                                                         │
//! │  Mutation:  in-memory transition commits FIRST, then a best-effort     │
//! │             save runs as a post-commit hook. A failed save is logged   │
//! │             and swallowed; the mutation has still succeeded.            │
//! │                                                                         │
//! │  Writes go through a temp file + rename so a crash mid-write leaves    │
//! │  the previous blob intact.                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::debug;

use crate::error::StoreResult;
use crate::snapshot::AppSnapshot;

/// Blob file name. The `v2` suffix tracks the storefront's storage key; bump
/// it on breaking snapshot-layout changes so stale blobs are ignored rather
/// than misparsed.
const SNAPSHOT_FILE: &str = "lumina-storage-v2.json";

// =============================================================================
// Persister Trait
// =============================================================================

/// Durable storage for snapshots.
///
/// The store owns a boxed persister and drives it from its post-commit hook;
/// tests substitute in-memory or failing implementations.
pub trait SnapshotPersister {
    /// Loads the persisted snapshot, if one exists.
    ///
    /// `Ok(None)` means "nothing persisted yet" and is not an error.
    fn load(&self) -> StoreResult<Option<AppSnapshot>>;

    /// Writes the snapshot, replacing any previous blob.
    fn save(&self, snapshot: &AppSnapshot) -> StoreResult<()>;
}

// =============================================================================
// JSON File Implementation
// =============================================================================

/// JSON-file persister.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a persister writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// Creates a persister at the platform-appropriate data location.
    ///
    /// - Linux: `~/.local/share/lumina-store/lumina-storage-v2.json`
    /// - macOS: `~/Library/Application Support/com.lumina.store/...`
    /// - Windows: `%APPDATA%/lumina/store/data/...`
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn at_default_location() -> Option<Self> {
        let dirs = ProjectDirs::from("com", "lumina", "lumina-store")?;
        Some(JsonFileStore::new(dirs.data_dir().join(SNAPSHOT_FILE)))
    }

    /// The file this persister reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotPersister for JsonFileStore {
    fn load(&self) -> StoreResult<Option<AppSnapshot>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no persisted snapshot");
            return Ok(None);
        }

        let raw = fs::read_to_string(&self.path)?;
        let snapshot = serde_json::from_str(&raw)?;
        debug!(path = %self.path.display(), "loaded persisted snapshot");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &AppSnapshot) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Temp file + rename: a crash mid-write never clobbers the old blob
        let tmp = self.path.with_extension("json.tmp");
        let raw = serde_json::to_string_pretty(snapshot)?;
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), "saved snapshot");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use lumina_core::{Money, Product, User, UserRole};

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            slug: format!("product-{}", id),
            description: "A test product".to_string(),
            price: Money::from_cents(price_cents),
            sale_price: None,
            category: "electronics".to_string(),
            images: vec!["https://example.com/p.jpg".to_string()],
            stock: 4,
            rating: 4.2,
            reviews_count: 37,
            is_featured: true,
        }
    }

    fn populated_snapshot() -> AppSnapshot {
        let mut snap = AppSnapshot {
            user: Some(User {
                id: "u1".to_string(),
                name: "Alex Johnson".to_string(),
                email: "alex@example.com".to_string(),
                role: UserRole::Admin,
                image: None,
            }),
            ..AppSnapshot::default()
        };
        snap.cart.add(&product("p1", 7999));
        snap.cart.add(&product("p1", 7999));
        snap.cart.add(&product("p2", 1250));
        snap.wishlist.toggle(&product("p3", 500));
        snap
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("snapshot.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("snapshot.json"));

        let snap = populated_snapshot();
        store.save(&snap).unwrap();

        let loaded = store.load().unwrap().expect("snapshot should exist");
        assert_eq!(loaded, snap);
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("deep/nested/snapshot.json"));

        store.save(&AppSnapshot::default()).unwrap();
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_overwrites_previous_blob() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("snapshot.json"));

        store.save(&AppSnapshot::default()).unwrap();
        let snap = populated_snapshot();
        store.save(&snap).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, snap);
    }
}
