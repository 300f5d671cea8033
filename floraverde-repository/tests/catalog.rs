mod common;

use common::setup_db;
use floraverde_models::{
    domain::prelude::ProductPayload,
    entities::prelude::{Category, CategoryActiveModel, Product},
    seed::CatalogSeeder,
};
use floraverde_repository::{CategoryRepository, ProductRepository};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

fn sample_payload(category_id: i32) -> ProductPayload {
    ProductPayload {
        id: 0,
        name: "Monstera Deliciosa".to_string(),
        description: "Planta tropical de interior".to_string(),
        price: 15990,
        image_url: "https://example.com/monstera.jpg".to_string(),
        watering: "Riego moderado".to_string(),
        light: "Luz indirecta".to_string(),
        category_id,
        stock: true,
    }
}

#[tokio::test]
async fn seeded_catalog_matches_dataset() {
    let db = setup_db().await;
    CatalogSeeder::seed_if_empty(&db).await.expect("seed");

    let categories = CategoryRepository::new(db.clone())
        .find_all()
        .await
        .expect("list categories");
    let names: Vec<(i32, &str)> = categories
        .iter()
        .map(|c| (c.id, c.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![
            (1, "Interior"),
            (2, "Exterior"),
            (3, "Suculentas"),
            (4, "Herramientas"),
            (5, "Cactus"),
        ]
    );

    let products = ProductRepository::new(db.clone())
        .find_all(None)
        .await
        .expect("list products");
    assert_eq!(products.len(), 9);
    // Every seeded product resolves its category display name.
    assert!(products.iter().all(|p| !p.category.is_empty()));
}

#[tokio::test]
async fn filter_by_category_returns_exactly_that_subset() {
    let db = setup_db().await;
    CatalogSeeder::seed_if_empty(&db).await.expect("seed");
    let products = ProductRepository::new(db);

    let cactus = products
        .find_all(Some("Cactus"))
        .await
        .expect("filtered list");
    assert_eq!(cactus.len(), 1);
    assert_eq!(cactus[0].name, "Cactus San Pedro");
    assert_eq!(cactus[0].category, "Cactus");

    let interior = products
        .find_all(Some("Interior"))
        .await
        .expect("filtered list");
    assert_eq!(interior.len(), 6);
    assert!(interior.iter().all(|p| p.category == "Interior"));
}

#[tokio::test]
async fn filter_by_unknown_category_yields_empty_list() {
    let db = setup_db().await;
    CatalogSeeder::seed_if_empty(&db).await.expect("seed");

    let none = ProductRepository::new(db)
        .find_all(Some("Bonsái"))
        .await
        .expect("filtered list");
    assert!(none.is_empty());
}

#[tokio::test]
async fn seed_if_empty_is_a_noop_on_a_populated_store() {
    let db = setup_db().await;
    CatalogSeeder::seed_if_empty(&db).await.expect("first seed");
    CatalogSeeder::seed_if_empty(&db).await.expect("second seed");

    assert_eq!(Category::find().count(&db).await.expect("count"), 5);
    assert_eq!(Product::find().count(&db).await.expect("count"), 9);
}

#[tokio::test]
async fn created_product_roundtrips_through_list() {
    let db = setup_db().await;
    CategoryActiveModel {
        name: Set("Interior".to_string()),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("insert category");

    let products = ProductRepository::new(db);
    let payload = sample_payload(1);
    let created = products.create(payload.clone()).await.expect("create");
    assert_eq!(created.category, "Interior");

    let listed = products.find_all(None).await.expect("list");
    assert_eq!(listed.len(), 1);
    let got = &listed[0];
    assert_eq!(got.name, payload.name);
    assert_eq!(got.description, payload.description);
    assert_eq!(got.price, payload.price);
    assert_eq!(got.image_url, payload.image_url);
    assert_eq!(got.watering, payload.watering);
    assert_eq!(got.light, payload.light);
    assert_eq!(got.category_id, payload.category_id);
    assert_eq!(got.category, "Interior");
    assert_eq!(got.stock, payload.stock);
}

#[tokio::test]
async fn dangling_category_reference_lists_with_empty_name() {
    let db = setup_db().await;
    let products = ProductRepository::new(db);

    let created = products.create(sample_payload(42)).await.expect("create");
    assert_eq!(created.category, "");

    let listed = products.find_all(None).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].category, "");
}

#[tokio::test]
async fn update_replaces_every_mutable_field() {
    let db = setup_db().await;
    let products = ProductRepository::new(db);

    let created = products.create(sample_payload(0)).await.expect("create");

    let mut replacement = ProductPayload {
        id: created.id,
        name: "Ficus Lyrata".to_string(),
        price: 18990,
        ..Default::default()
    };
    replacement.stock = true;
    let updated = products.update(replacement).await.expect("update");
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Ficus Lyrata");

    let listed = products.find_all(None).await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "Ficus Lyrata");
    assert_eq!(listed[0].price, 18990);
    // Full replacement: fields absent from the new payload fall back to
    // their zero values.
    assert_eq!(listed[0].description, "");
    assert_eq!(listed[0].watering, "");
}

#[tokio::test]
async fn update_of_missing_row_succeeds_and_mutates_nothing() {
    let db = setup_db().await;
    let products = ProductRepository::new(db);

    let echoed = products
        .update(ProductPayload {
            id: 7,
            name: "Lavanda".to_string(),
            ..Default::default()
        })
        .await
        .expect("update of missing row");
    assert_eq!(echoed.id, 7);

    let listed = products.find_all(None).await.expect("list");
    assert!(listed.is_empty());
}

#[tokio::test]
async fn deleting_twice_succeeds_both_times() {
    let db = setup_db().await;
    let products = ProductRepository::new(db);

    let created = products.create(sample_payload(0)).await.expect("create");

    products.delete(created.id).await.expect("first delete");
    assert!(products.find_all(None).await.expect("list").is_empty());
    products.delete(created.id).await.expect("second delete");
}
