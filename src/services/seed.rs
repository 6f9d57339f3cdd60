// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sample campus catalog: the fixed containers and rewards loaded by init-data.

use chrono::Utc;

use crate::db::FirestoreDb;
use crate::error::Result;
use crate::models::{
    Category, Container, ContainerStatus, ContainerType, DocumentId, MapLocation, Reward,
};

/// What an init-data call did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Containers already existed; nothing written.
    AlreadyInitialized,
    Seeded { containers: usize, rewards: usize },
}

/// Load the sample catalog unless containers already exist.
pub async fn init_sample_data(db: &FirestoreDb) -> Result<SeedOutcome> {
    if db.has_containers().await? {
        tracing::debug!("Catalog already initialized, skipping seed");
        return Ok(SeedOutcome::AlreadyInitialized);
    }

    let containers = sample_containers();
    let rewards = sample_rewards();
    db.seed_catalog(&containers, &rewards).await?;

    Ok(SeedOutcome::Seeded {
        containers: containers.len(),
        rewards: rewards.len(),
    })
}

pub fn sample_containers() -> Vec<Container> {
    use ContainerStatus::{Maintenance, Operational};
    use ContainerType::{Mixed, Paper, Plastic};

    let now = Utc::now();
    [
        (
            "Contenedor A - Biblioteca",
            (30.0, 40.0),
            Operational,
            "Edificio de Biblioteca, Piso 1",
            Mixed,
        ),
        ("Contenedor B - Cafetería", (60.0, 30.0), Operational, "Cafetería Central", Plastic),
        (
            "Contenedor C - Laboratorios",
            (45.0, 70.0),
            Maintenance,
            "Edificio de Laboratorios, Entrada Principal",
            Paper,
        ),
        ("Contenedor D - Gimnasio", (75.0, 60.0), Operational, "Centro Deportivo", Mixed),
        (
            "Contenedor E - Estacionamiento",
            (20.0, 20.0),
            Operational,
            "Estacionamiento Norte",
            Mixed,
        ),
    ]
    .into_iter()
    .map(|(name, (x, y), status, address, kind)| Container {
        id: DocumentId::generate(),
        name: name.to_string(),
        location: MapLocation { x, y },
        status,
        address: address.to_string(),
        kind,
        last_maintenance: now,
    })
    .collect()
}

pub fn sample_rewards() -> Vec<Reward> {
    use Category::{Black, Clasico, Diamante, Oro, Plata};

    [
        (
            "Café Gratis",
            "1 café americano o capuchino gratis en la cafetería",
            50,
            Clasico,
            "☕",
            "Cafetín",
        ),
        (
            "Descuento 10% Librería",
            "10% de descuento en cualquier producto de la librería",
            80,
            Clasico,
            "📚",
            "Librería",
        ),
        ("Snack Gratis", "Elige un snack gratis en la cafetería", 30, Clasico, "🍪", "Cafetín"),
        (
            "Cuaderno Universitario",
            "Cuaderno de 100 hojas tamaño universitario",
            120,
            Plata,
            "📓",
            "Librería",
        ),
        (
            "Vale S/10 Cafetería",
            "Vale por S/10 para usar en la cafetería",
            150,
            Plata,
            "🎫",
            "Cafetín",
        ),
        ("Set de Lapiceros", "Set de 5 lapiceros de colores", 100, Plata, "🖊️", "Librería"),
        ("Vale S/20 Librería", "Vale por S/20 para usar en la librería", 300, Oro, "🎁", "Librería"),
        (
            "Mochila Ecológica",
            "Mochila de material reciclado con logo RISIB",
            400,
            Oro,
            "🎒",
            "Tienda RISIB",
        ),
        ("Almuerzo Gratis", "Menú completo gratis en la cafetería", 250, Oro, "🍽️", "Cafetín"),
        (
            "Vale S/50 Multiuso",
            "Vale por S/50 para usar en cafetería o librería",
            700,
            Diamante,
            "💎",
            "Multiuso",
        ),
        ("Laptop Cooling Pad", "Base refrigerante para laptop", 800, Diamante, "💻", "Tienda Tech"),
        (
            "Vale S/100 Premium",
            "Vale por S/100 para usar en cualquier establecimiento del campus",
            1200,
            Black,
            "🏆",
            "Premium",
        ),
        ("Tablet Ecológica", "Tablet para tomar notas digitales", 1500, Black, "📱", "Tienda Tech"),
    ]
    .into_iter()
    .map(|(title, description, points_cost, category, image, location)| Reward {
        id: DocumentId::generate(),
        title: title.to_string(),
        description: description.to_string(),
        points_cost,
        category,
        available: true,
        image: image.to_string(),
        location: location.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_shape() {
        let containers = sample_containers();
        assert_eq!(containers.len(), 5);
        assert_eq!(
            containers.iter().filter(|c| !c.is_operational()).count(),
            1,
            "exactly one container starts in maintenance"
        );

        let rewards = sample_rewards();
        assert_eq!(rewards.len(), 13);
        for tier in Category::LADDER {
            assert!(
                rewards.iter().any(|r| r.category == tier),
                "no reward for {tier}"
            );
        }
        assert!(rewards.iter().all(|r| r.available && r.points_cost > 0));
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let db = FirestoreDb::new_in_memory();

        let first = init_sample_data(&db).await.unwrap();
        assert_eq!(
            first,
            SeedOutcome::Seeded {
                containers: 5,
                rewards: 13
            }
        );

        let second = init_sample_data(&db).await.unwrap();
        assert_eq!(second, SeedOutcome::AlreadyInitialized);
        assert_eq!(db.list_containers().await.unwrap().len(), 5);
        assert_eq!(db.list_rewards().await.unwrap().len(), 13);
    }
}
