// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mock account management.
//!
//! Any credentials are accepted: login creates the user on first sight of an
//! email, register refuses emails that already exist.

use chrono::Utc;
use rand::Rng;

use crate::db::FirestoreDb;
use crate::error::{AppError, Result};
use crate::models::{Category, DocumentId, User};

/// Return the user registered with `email`, creating it if needed.
pub async fn login(db: &FirestoreDb, email: &str, password: &str) -> Result<User> {
    if let Some(user) = db.find_user_by_email(email).await? {
        tracing::debug!(user_id = %user.id, "Existing user logged in");
        return Ok(user);
    }

    let user = new_user(email, password);
    db.upsert_user(&user).await?;
    tracing::info!(
        user_id = %user.id,
        student_id = %user.student_id,
        "Created user on first login"
    );

    Ok(user)
}

/// Create a user for an email that must not be registered yet.
pub async fn register(db: &FirestoreDb, email: &str, password: &str) -> Result<User> {
    if db.find_user_by_email(email).await?.is_some() {
        return Err(AppError::BadRequest("Usuario ya existe".to_string()));
    }

    let user = new_user(email, password);
    db.upsert_user(&user).await?;
    tracing::info!(user_id = %user.id, student_id = %user.student_id, "Registered user");

    Ok(user)
}

/// Build a fresh user with zero points.
pub fn new_user(email: &str, password: &str) -> User {
    let student_number: u32 = rand::rng().random_range(10_000..=99_999);
    let local_part = email.split('@').next().unwrap_or_default();

    User {
        id: DocumentId::generate(),
        student_id: format!("ST{}", student_number),
        name: title_case(local_part),
        email: email.to_string(),
        password: password.to_string(),
        avatar: avatar_initial(email),
        points: 0,
        category: Category::Clasico,
        points_history: Vec::new(),
        recycled_kg: 0.0,
        created_at: Utc::now(),
    }
}

/// Upper-case the first letter of every run of letters and lower-case the rest.
///
/// `maria.lopez` becomes `Maria.Lopez`.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;

    for ch in s.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

fn avatar_initial(email: &str) -> String {
    email
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
