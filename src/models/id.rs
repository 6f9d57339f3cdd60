// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Opaque document identifiers.
//!
//! Identifiers use Firestore's auto-id shape: 20 ASCII alphanumerics.

use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const DOCUMENT_ID_LEN: usize = 20;

/// Identifier of a stored document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        let id: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(DOCUMENT_ID_LEN)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
#[error("malformed document id: {0:?}")]
pub struct InvalidDocumentId(pub String);

impl FromStr for DocumentId {
    type Err = InvalidDocumentId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == DOCUMENT_ID_LEN && s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidDocumentId(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_parse() {
        for _ in 0..50 {
            let id = DocumentId::generate();
            assert_eq!(id.as_str().len(), DOCUMENT_ID_LEN);
            let reparsed: DocumentId = id.as_str().parse().unwrap();
            assert_eq!(reparsed, id);
        }
    }

    #[test]
    fn test_generated_ids_differ() {
        assert_ne!(DocumentId::generate(), DocumentId::generate());
    }

    #[test]
    fn test_rejects_malformed() {
        assert!("".parse::<DocumentId>().is_err());
        assert!("short".parse::<DocumentId>().is_err());
        assert!("Contenedor A - Biblioteca".parse::<DocumentId>().is_err());
        assert!("abcdefghij-klmnopqrs".parse::<DocumentId>().is_err());
        assert!("abcdefghijklmnopqrstu".parse::<DocumentId>().is_err());
        assert!("abcdefghijKLMNOPQRS1".parse::<DocumentId>().is_ok());
    }
}
