// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod accounts;
pub mod ledger;
pub mod redemption;
pub mod scan;
pub mod seed;

pub use ledger::RedemptionError;
pub use redemption::{redeem_reward, RedemptionOutcome};
pub use scan::{scan_container, ScanOutcome};
pub use seed::{init_sample_data, SeedOutcome};
