// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Campus recycling rewards backend.
//!
//! Students scan QR codes on recycling containers to earn points. Points
//! place them on a five-tier loyalty ladder and can be redeemed for rewards
//! from a fixed campus catalog.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::FirestoreDb;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: FirestoreDb,
}
