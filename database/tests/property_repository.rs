// Integration tests for the property search path.
//
// These run against a real PostgreSQL instance and are ignored by default.
// Run them with DATABASE_URL pointing at a throwaway database:
//
//   cargo test -p estate-database -- --ignored --test-threads=1
//
// Each test truncates the tables it touches, so use a dedicated database.

use std::collections::HashSet;

use estate_database::models::{
    CreatePropertyInput, ListingStatus, Pagination, PropertyFilters, PropertyType,
};
use estate_database::repositories::PropertyRepository;
use estate_database::{Database, DatabaseConfig};

async fn setup() -> Database {
    let db = Database::new(&DatabaseConfig::from_env())
        .await
        .expect("connect to test database");
    db.migrate().await.expect("run migrations");
    sqlx::query("TRUNCATE properties CASCADE")
        .execute(db.pool())
        .await
        .expect("truncate properties");
    db
}

fn listing(title: &str, status: &str, property_type: &str, price: i64) -> CreatePropertyInput {
    CreatePropertyInput {
        title: title.to_string(),
        description: String::new(),
        status: status.to_string(),
        category: "residential".to_string(),
        property_type: property_type.to_string(),
        sub_type: None,
        furnished_status: None,
        parking: None,
        facing: None,
        price,
        area: 1000,
        bedrooms: 2,
        bathrooms: 2,
        address: None,
        city: Some("Delhi".to_string()),
        locality: None,
        latitude: None,
        longitude: None,
    }
}

/// Seed the three-listing scenario: P1 active sale apartment, P2 active
/// rent villa, P3 an inactive copy of P1.
async fn seed_scenario(repo: &PropertyRepository, db: &Database) -> (uuid::Uuid, uuid::Uuid) {
    let p1 = repo
        .create(&listing("Luxury Apartment in Greater Kailash", "sale", "apartment", 5_000_000))
        .await
        .expect("create P1");
    let p2 = repo
        .create(&listing("Villa on Rent", "rent", "villa", 50_000))
        .await
        .expect("create P2");
    let p3 = repo
        .create(&listing("Luxury Apartment in Greater Kailash", "sale", "apartment", 5_000_000))
        .await
        .expect("create P3");
    repo.set_active(&p3.id, false).await.expect("deactivate P3");

    // Make created_at distinct so the newest-first order is deterministic.
    sqlx::query("UPDATE properties SET created_at = created_at - interval '1 hour' WHERE id = $1")
        .bind(p1.id)
        .execute(db.pool())
        .await
        .expect("age P1");

    (p1.id, p2.id)
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn status_filter_excludes_inactive_matches() {
    let db = setup().await;
    let repo = PropertyRepository::new(db.pool().clone());
    let (p1, _) = seed_scenario(&repo, &db).await;

    let filters = PropertyFilters {
        status: Some(ListingStatus::Sale),
        ..Default::default()
    };
    let result = repo.search(&filters, &Pagination::default()).await.unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.items.len(), 1);
    assert_eq!(result.items[0].property.id, p1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn unfiltered_search_returns_all_active_newest_first() {
    let db = setup().await;
    let repo = PropertyRepository::new(db.pool().clone());
    let (p1, p2) = seed_scenario(&repo, &db).await;

    let result = repo
        .search(&PropertyFilters::default(), &Pagination::default())
        .await
        .unwrap();

    assert_eq!(result.total, 2);
    let ids: Vec<_> = result.items.iter().map(|p| p.property.id).collect();
    assert_eq!(ids, vec![p2, p1]);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn min_price_bound_filters_the_cheap_listing() {
    let db = setup().await;
    let repo = PropertyRepository::new(db.pool().clone());
    let (p1, _) = seed_scenario(&repo, &db).await;

    let filters = PropertyFilters {
        min_price: Some(1_000_000),
        ..Default::default()
    };
    let result = repo.search(&filters, &Pagination::default()).await.unwrap();

    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].property.id, p1);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn search_is_a_case_insensitive_substring_match() {
    let db = setup().await;
    let repo = PropertyRepository::new(db.pool().clone());
    let (p1, _) = seed_scenario(&repo, &db).await;

    let filters = PropertyFilters {
        search: Some("kailash".to_string()),
        ..Default::default()
    };
    let result = repo.search(&filters, &Pagination::default()).await.unwrap();
    assert_eq!(result.total, 1);
    assert_eq!(result.items[0].property.id, p1);

    let filters = PropertyFilters {
        search: Some("nonexistent-term-xyz".to_string()),
        ..Default::default()
    };
    let result = repo.search(&filters, &Pagination::default()).await.unwrap();
    assert_eq!(result.total, 0);
    assert!(result.items.is_empty());
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn type_filter_never_leaks_other_types() {
    let db = setup().await;
    let repo = PropertyRepository::new(db.pool().clone());
    seed_scenario(&repo, &db).await;

    let filters = PropertyFilters {
        property_type: Some(PropertyType::Villa),
        ..Default::default()
    };
    let result = repo.search(&filters, &Pagination::default()).await.unwrap();

    assert_eq!(result.total, 1);
    assert!(result
        .items
        .iter()
        .all(|p| p.property.property_type == "villa"));
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn concatenated_pages_reconstruct_the_full_result_set() {
    let db = setup().await;
    let repo = PropertyRepository::new(db.pool().clone());

    let mut expected = HashSet::new();
    for i in 0..12 {
        let created = repo
            .create(&listing(&format!("Listing {}", i), "sale", "apartment", 100_000 + i))
            .await
            .unwrap();
        expected.insert(created.id);
    }

    let filters = PropertyFilters::default();
    let limit = 5;
    let first = repo
        .search(&filters, &Pagination::from_page(1, limit))
        .await
        .unwrap();
    assert_eq!(first.total, 12);
    assert_eq!(first.total_pages(), 3);

    let mut seen = HashSet::new();
    for page in 1..=first.total_pages() {
        let result = repo
            .search(&filters, &Pagination::from_page(page, limit))
            .await
            .unwrap();
        assert!(result.items.len() as i64 <= limit);
        assert_eq!(result.total, 12);
        for item in result.items {
            assert!(seen.insert(item.property.id), "duplicate across pages");
        }
    }
    assert_eq!(seen, expected);
}

#[tokio::test]
#[ignore = "requires a running PostgreSQL with DATABASE_URL set"]
async fn inactive_listing_is_invisible_to_detail_view() {
    let db = setup().await;
    let repo = PropertyRepository::new(db.pool().clone());

    let p = repo
        .create(&listing("Hidden", "sale", "apartment", 1))
        .await
        .unwrap();
    repo.set_active(&p.id, false).await.unwrap();

    assert!(repo.find_by_id(&p.id).await.unwrap().is_none());
    assert!(repo.find_by_id_admin(&p.id).await.unwrap().is_some());
}
