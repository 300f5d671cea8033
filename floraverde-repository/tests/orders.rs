mod common;

use common::setup_db;
use floraverde_models::{
    domain::prelude::{NewOrder, NewOrderItem},
    entities::prelude::{Category, Order, OrderItem, OrderItemColumn, Product},
    seed::CatalogSeeder,
};
use floraverde_repository::OrderRepository;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DbBackend, EntityTrait, PaginatorTrait, QueryFilter, Statement,
};

fn sample_order(items: Vec<NewOrderItem>) -> NewOrder {
    NewOrder {
        customer_name: "Valentina Rojas".to_string(),
        customer_email: "valentina@example.com".to_string(),
        address: "Av. Siempreviva 742, Santiago".to_string(),
        total: 28980,
        items,
    }
}

#[tokio::test]
async fn order_with_n_items_persists_one_header_and_n_rows() {
    let db = setup_db().await;
    CatalogSeeder::seed_if_empty(&db).await.expect("seed");

    let items = vec![
        NewOrderItem {
            product_id: 1,
            quantity: 1,
        },
        NewOrderItem {
            product_id: 2,
            quantity: 2,
        },
        NewOrderItem {
            product_id: 5,
            quantity: 1,
        },
    ];
    let order_id = OrderRepository::new(db.clone())
        .create(sample_order(items))
        .await
        .expect("create order");

    let header = Order::find_by_id(order_id)
        .one(&db)
        .await
        .expect("read header")
        .expect("header exists");
    assert_eq!(header.customer_name, "Valentina Rojas");
    assert_eq!(header.total, 28980);
    assert!(header.created_at.is_some());

    let rows = OrderItem::find()
        .filter(OrderItemColumn::OrderId.eq(order_id))
        .all(&db)
        .await
        .expect("read items");
    assert_eq!(rows.len(), 3);
    assert_eq!(Order::find().count(&db).await.expect("count"), 1);
}

#[tokio::test]
async fn failed_item_insert_rolls_back_the_whole_order() {
    let db = setup_db().await;
    CatalogSeeder::seed_if_empty(&db).await.expect("seed");

    // The schema declares order_items.product_id as a FK; enforcement is
    // off by default, so switch it on for this connection to make the
    // last item insert fail.
    db.execute(Statement::from_string(
        DbBackend::Sqlite,
        "PRAGMA foreign_keys = ON;".to_string(),
    ))
    .await
    .expect("enable fk enforcement");

    let items = vec![
        NewOrderItem {
            product_id: 1,
            quantity: 1,
        },
        NewOrderItem {
            product_id: 424242,
            quantity: 1,
        },
    ];
    let result = OrderRepository::new(db.clone())
        .create(sample_order(items))
        .await;
    assert!(result.is_err());

    // Nothing survives: no header, no items.
    assert_eq!(Order::find().count(&db).await.expect("count"), 0);
    assert_eq!(OrderItem::find().count(&db).await.expect("count"), 0);
}

#[tokio::test]
async fn orders_are_accepted_without_business_validation() {
    let db = setup_db().await;

    // No products exist, quantity is zero and the total is arbitrary;
    // all of it is persisted as supplied.
    let order = NewOrder {
        total: -1,
        items: vec![NewOrderItem {
            product_id: 99,
            quantity: 0,
        }],
        ..Default::default()
    };
    let order_id = OrderRepository::new(db.clone())
        .create(order)
        .await
        .expect("create order");

    let header = Order::find_by_id(order_id)
        .one(&db)
        .await
        .expect("read header")
        .expect("header exists");
    assert_eq!(header.total, -1);
}

#[tokio::test]
async fn reseed_clears_orders_and_reloads_the_catalog() {
    let db = setup_db().await;
    CatalogSeeder::seed_if_empty(&db).await.expect("seed");

    OrderRepository::new(db.clone())
        .create(sample_order(vec![NewOrderItem {
            product_id: 1,
            quantity: 1,
        }]))
        .await
        .expect("create order");

    CatalogSeeder::reseed(&db).await.expect("reseed");

    assert_eq!(Order::find().count(&db).await.expect("count"), 0);
    assert_eq!(OrderItem::find().count(&db).await.expect("count"), 0);
    assert_eq!(Product::find().count(&db).await.expect("count"), 9);
    assert_eq!(Category::find().count(&db).await.expect("count"), 5);
}
