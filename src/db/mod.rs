//! Database layer (Firestore, with an in-memory mode).

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryStore;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const CONTAINERS: &str = "containers";
    pub const REWARDS: &str = "rewards";
    /// Scan audit log (append-only)
    pub const SCANS: &str = "scans";
}

/// Upper bound on documents returned by list queries.
pub const MAX_LIST_RESULTS: u32 = 100;
