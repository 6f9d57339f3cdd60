// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile, points balance and history)
//! - Containers and rewards (seeded catalog)
//! - Scans (append-only audit log)
//!
//! The same API is served from an in-memory store when the service runs
//! with `DATASTORE=memory` or under test.

use crate::db::{collections, MemoryStore, MAX_LIST_RESULTS};
use crate::error::AppError;
use crate::models::{Container, DocumentId, Reward, Scan, User};
use futures_util::{stream, StreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

const MAX_CONCURRENT_DB_OPS: usize = 50;

#[derive(Clone)]
enum Backend {
    Firestore(firestore::FirestoreDb),
    Memory(Arc<MemoryStore>),
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    backend: Backend,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // The emulator accepts any bearer token; hand it an unsigned one.
        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(project = project_id, "Connected to Firestore (Emulator)");

        Ok(Self {
            backend: Backend::Firestore(client),
        })
    }

    /// Create a client backed by a fresh in-memory store.
    pub fn new_in_memory() -> Self {
        Self::with_memory_store(Arc::new(MemoryStore::new()))
    }

    /// Create a client over an existing in-memory store (lets tests inspect it).
    pub fn with_memory_store(store: Arc<MemoryStore>) -> Self {
        Self {
            backend: Backend::Memory(store),
        }
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by document ID.
    pub async fn get_user(&self, id: &DocumentId) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::USERS)
                .obj()
                .one(id.as_str())
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.get_user(id)),
        }
    }

    /// Find the user registered with `email`, if any.
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let users: Vec<User> = client
                    .fluent()
                    .select()
                    .from(collections::USERS)
                    .filter(|q| q.for_all([q.field("email").eq(email)]))
                    .limit(1)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(users.into_iter().next())
            }
            Backend::Memory(store) => Ok(store.find_user_by_email(email)),
        }
    }

    /// Create or replace a user document.
    pub async fn upsert_user(&self, user: &User) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let _: () = client
                    .fluent()
                    .update()
                    .in_col(collections::USERS)
                    .document_id(user.id.as_str())
                    .object(user)
                    .execute()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
            }
            Backend::Memory(store) => store.upsert_user(user),
        }
        Ok(())
    }

    // ─── Scan Operations ─────────────────────────────────────────

    /// Write the updated user and its scan audit record in one transaction.
    ///
    /// The user was read before this call, so concurrent scans for the same
    /// user can still overwrite each other's balance.
    pub async fn commit_scan(&self, user: &User, scan: &Scan) -> Result<(), AppError> {
        let client = match &self.backend {
            Backend::Firestore(client) => client,
            Backend::Memory(store) => {
                store.commit_scan(user, scan);
                return Ok(());
            }
        };

        let mut transaction = client
            .begin_transaction()
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

        client
            .fluent()
            .update()
            .in_col(collections::USERS)
            .document_id(user.id.as_str())
            .object(user)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add user to transaction: {}", e))
            })?;

        client
            .fluent()
            .update()
            .in_col(collections::SCANS)
            .document_id(scan.id.as_str())
            .object(scan)
            .add_to_transaction(&mut transaction)
            .map_err(|e| {
                AppError::Database(format!("Failed to add scan to transaction: {}", e))
            })?;

        transaction
            .commit()
            .await
            .map_err(|e| AppError::Database(format!("Transaction commit failed: {}", e)))?;

        Ok(())
    }

    /// Scan audit records for a user, oldest first.
    pub async fn get_scans_for_user(&self, user_id: &DocumentId) -> Result<Vec<Scan>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::SCANS)
                .filter(|q| q.for_all([q.field("userId").eq(user_id.as_str())]))
                .order_by([("timestamp", firestore::FirestoreQueryDirection::Ascending)])
                .obj()
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.scans_for_user(user_id)),
        }
    }

    // ─── Container Operations ────────────────────────────────────

    /// Get a container by document ID.
    pub async fn get_container(&self, id: &DocumentId) -> Result<Option<Container>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::CONTAINERS)
                .obj()
                .one(id.as_str())
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.get_container(id)),
        }
    }

    /// Find a container by its display name.
    pub async fn find_container_by_name(&self, name: &str) -> Result<Option<Container>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let containers: Vec<Container> = client
                    .fluent()
                    .select()
                    .from(collections::CONTAINERS)
                    .filter(|q| q.for_all([q.field("name").eq(name)]))
                    .limit(1)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(containers.into_iter().next())
            }
            Backend::Memory(store) => Ok(store.find_container_by_name(name)),
        }
    }

    /// All containers, ordered by name.
    pub async fn list_containers(&self) -> Result<Vec<Container>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::CONTAINERS)
                .order_by([("name", firestore::FirestoreQueryDirection::Ascending)])
                .limit(MAX_LIST_RESULTS)
                .obj()
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.list_containers()),
        }
    }

    /// Whether any container document exists.
    pub async fn has_containers(&self) -> Result<bool, AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let sample: Vec<Container> = client
                    .fluent()
                    .select()
                    .from(collections::CONTAINERS)
                    .limit(1)
                    .obj()
                    .query()
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok(!sample.is_empty())
            }
            Backend::Memory(store) => Ok(store.has_containers()),
        }
    }

    // ─── Reward Operations ───────────────────────────────────────

    /// Get a reward by document ID.
    pub async fn get_reward(&self, id: &DocumentId) -> Result<Option<Reward>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .by_id_in(collections::REWARDS)
                .obj()
                .one(id.as_str())
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.get_reward(id)),
        }
    }

    /// All rewards in the catalog (unordered).
    pub async fn list_rewards(&self) -> Result<Vec<Reward>, AppError> {
        match &self.backend {
            Backend::Firestore(client) => client
                .fluent()
                .select()
                .from(collections::REWARDS)
                .limit(MAX_LIST_RESULTS)
                .obj()
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string())),
            Backend::Memory(store) => Ok(store.list_rewards()),
        }
    }

    // ─── Catalog Seeding ─────────────────────────────────────────

    /// Store the sample containers and rewards.
    ///
    /// Uses concurrent writes with a limit to avoid overloading Firestore.
    pub async fn seed_catalog(
        &self,
        containers: &[Container],
        rewards: &[Reward],
    ) -> Result<(), AppError> {
        match &self.backend {
            Backend::Firestore(client) => {
                let container_docs = containers
                    .iter()
                    .map(|c| (c.id.to_string(), c.clone()))
                    .collect();
                upsert_concurrently(client, collections::CONTAINERS, container_docs).await?;

                let reward_docs = rewards
                    .iter()
                    .map(|r| (r.id.to_string(), r.clone()))
                    .collect();
                upsert_concurrently(client, collections::REWARDS, reward_docs).await?;
            }
            Backend::Memory(store) => {
                containers.iter().for_each(|c| store.upsert_container(c));
                rewards.iter().for_each(|r| store.upsert_reward(r));
            }
        }

        tracing::info!(
            containers = containers.len(),
            rewards = rewards.len(),
            "Catalog seeded"
        );
        Ok(())
    }
}

/// Upsert `(document_id, document)` pairs into `collection`, at most
/// `MAX_CONCURRENT_DB_OPS` in flight.
async fn upsert_concurrently<T>(
    client: &firestore::FirestoreDb,
    collection: &'static str,
    docs: Vec<(String, T)>,
) -> Result<(), AppError>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    stream::iter(docs)
        .map(|(doc_id, doc)| async move {
            let _: () = client
                .fluent()
                .update()
                .in_col(collection)
                .document_id(&doc_id)
                .object(&doc)
                .execute()
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;

            Ok::<_, AppError>(())
        })
        .buffer_unordered(MAX_CONCURRENT_DB_OPS)
        .collect::<Vec<Result<(), AppError>>>()
        .await
        .into_iter()
        .collect::<Result<Vec<()>, AppError>>()?;

    Ok(())
}
