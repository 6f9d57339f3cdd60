// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Process-local document store.
//!
//! Mirrors the Firestore collections with one concurrent map per collection.
//! Used by tests and by `DATASTORE=memory` for local development.

use dashmap::DashMap;

use crate::db::MAX_LIST_RESULTS;
use crate::models::{Container, DocumentId, Reward, Scan, User};

/// In-memory collections keyed by document ID.
#[derive(Default)]
pub struct MemoryStore {
    users: DashMap<DocumentId, User>,
    containers: DashMap<DocumentId, Container>,
    rewards: DashMap<DocumentId, Reward>,
    scans: DashMap<DocumentId, Scan>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Users ───────────────────────────────────────────────────

    pub fn get_user(&self, id: &DocumentId) -> Option<User> {
        self.users.get(id).map(|u| u.clone())
    }

    pub fn find_user_by_email(&self, email: &str) -> Option<User> {
        self.users
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.value().clone())
    }

    pub fn upsert_user(&self, user: &User) {
        self.users.insert(user.id.clone(), user.clone());
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    // ─── Scans ───────────────────────────────────────────────────

    /// Store the updated user and its scan record together.
    pub fn commit_scan(&self, user: &User, scan: &Scan) {
        self.users.insert(user.id.clone(), user.clone());
        self.scans.insert(scan.id.clone(), scan.clone());
    }

    pub fn scans_for_user(&self, user_id: &DocumentId) -> Vec<Scan> {
        let mut scans: Vec<Scan> = self
            .scans
            .iter()
            .filter(|entry| &entry.user_id == user_id)
            .map(|entry| entry.value().clone())
            .collect();
        scans.sort_by(|a, b| a.timestamp.cmp(&b.timestamp));
        scans
    }

    // ─── Containers ──────────────────────────────────────────────

    pub fn get_container(&self, id: &DocumentId) -> Option<Container> {
        self.containers.get(id).map(|c| c.clone())
    }

    pub fn find_container_by_name(&self, name: &str) -> Option<Container> {
        self.containers
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.value().clone())
    }

    /// Containers ordered by name, capped like the Firestore query.
    pub fn list_containers(&self) -> Vec<Container> {
        let mut containers: Vec<Container> =
            self.containers.iter().map(|e| e.value().clone()).collect();
        containers.sort_by(|a, b| a.name.cmp(&b.name));
        containers.truncate(MAX_LIST_RESULTS as usize);
        containers
    }

    pub fn has_containers(&self) -> bool {
        !self.containers.is_empty()
    }

    pub fn upsert_container(&self, container: &Container) {
        self.containers
            .insert(container.id.clone(), container.clone());
    }

    // ─── Rewards ─────────────────────────────────────────────────

    pub fn get_reward(&self, id: &DocumentId) -> Option<Reward> {
        self.rewards.get(id).map(|r| r.clone())
    }

    pub fn list_rewards(&self) -> Vec<Reward> {
        let mut rewards: Vec<Reward> = self.rewards.iter().map(|e| e.value().clone()).collect();
        rewards.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        rewards.truncate(MAX_LIST_RESULTS as usize);
        rewards
    }

    pub fn upsert_reward(&self, reward: &Reward) {
        self.rewards.insert(reward.id.clone(), reward.clone());
    }
}
