//! Fixed initial catalog and the startup seeder that loads it.

use crate::entities::prelude::{
    Category, CategoryActiveModel, Order, OrderItem, Product, ProductActiveModel,
};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, PaginatorTrait,
    Set, TransactionError, TransactionTrait,
};
use std::collections::HashMap;
use tracing::{info, instrument};

/// A product definition as shipped in the seed dataset. References its
/// category by display name; the id is resolved at insert time.
struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: i64,
    image_url: &'static str,
    watering: &'static str,
    light: &'static str,
    category: &'static str,
    stock: bool,
}

const SEED_CATEGORIES: [&str; 5] = [
    "Interior",
    "Exterior",
    "Suculentas",
    "Herramientas",
    "Cactus",
];

const SEED_PRODUCTS: [SeedProduct; 9] = [
    SeedProduct {
        name: "Monstera Deliciosa",
        description: "Planta tropical de interior con hojas grandes y vistosas. Ideal para espacios amplios con luz indirecta.",
        price: 15990,
        image_url: "https://d17jkdlzll9byv.cloudfront.net/wp-content/uploads/2022/07/monstera-deliciosa-003.jpg",
        watering: "Riego moderado",
        light: "Luz indirecta",
        category: "Interior",
        stock: true,
    },
    SeedProduct {
        name: "Pothos Dorado",
        description: "Planta colgante de fácil cuidado. Perfecta para principiantes y espacios con poca luz natural.",
        price: 12990,
        image_url: "https://res.cloudinary.com/fronda/image/upload/f_auto,q_auto,c_fill,g_center,w_528,h_704/productos/fol/10012/10012157_1.jpg?02-01-2024",
        watering: "Poco riego",
        light: "Luz baja-media",
        category: "Interior",
        stock: true,
    },
    SeedProduct {
        name: "Helecho Boston",
        description: "Planta purificadora del aire con follaje exuberante. Ideal para baños y cocinas con humedad.",
        price: 9990,
        image_url: "https://cdn.be.green/small/63d3e7c8713d7602115927.jpg",
        watering: "Riego frecuente",
        light: "Luz indirecta",
        category: "Interior",
        stock: true,
    },
    SeedProduct {
        name: "Suculenta Mix",
        description: "Set de 3 suculentas variadas en macetas decorativas. Requieren poco riego y mantenimiento mínimo.",
        price: 8990,
        image_url: "https://cdnx.jumpseller.com/www-feelflowers-cl/image/33635783/thumb/1079/1079?1680287114",
        watering: "Poco riego",
        light: "Luz directa",
        category: "Suculentas",
        stock: true,
    },
    SeedProduct {
        name: "Cactus San Pedro",
        description: "Cactus columnar de rápido crecimiento. Resistente y de bajo mantenimiento, ideal para exterior.",
        price: 6990,
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcRClTLm2tMnPTTNoi6SjGDUxFXT9-QxUNmjzg&s",
        watering: "Muy poco riego",
        light: "Sol directo",
        category: "Cactus",
        stock: true,
    },
    SeedProduct {
        name: "Ficus Lyrata",
        description: "También conocida como Higuera de hoja de violín. Planta de interior elegante con hojas grandes.",
        price: 18990,
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcTWQpoUzihEF7JX5YBKxr_ERZ7sfDoY7Ymvbg&s",
        watering: "Riego moderado",
        light: "Luz brillante",
        category: "Interior",
        stock: true,
    },
    SeedProduct {
        name: "Sansevieria",
        description: "Una de las plantas más resistentes. Perfecta para oficinas y espacios con poca luz.",
        price: 11990,
        image_url: "https://www.jardinerosenlima.com/wp-content/uploads/2023/03/Beneficios-y-cuidados-lengua-de-suegra.png",
        watering: "Muy poco riego",
        light: "Luz baja-alta",
        category: "Interior",
        stock: true,
    },
    SeedProduct {
        name: "Aloe Vera",
        description: "Planta medicinal con múltiples beneficios. Fácil de cuidar y de propiedades curativas.",
        price: 7990,
        image_url: "https://encrypted-tbn0.gstatic.com/images?q=tbn:ANd9GcSQrao-I2Go9SnPZupwF0vFa0o1tVbt4GiN6pdMnmqrVPpenCATOJdo-iRY3DhWtJuSbLc&usqp=CAU",
        watering: "Poco riego",
        light: "Luz directa",
        category: "Interior",
        stock: true,
    },
    SeedProduct {
        name: "Lavanda",
        description: "Planta aromática de flores violetas. Ideal para jardines y balcones soleados.",
        price: 9990,
        image_url: "https://cdn.shopify.com/s/files/1/0272/1392/2339/files/Lavanda-dentata_22o__cocoantracita_comprar-plantas-online_plantas-de-interior.jpg?v=1689089438",
        watering: "Poco riego",
        light: "Sol directo",
        category: "Exterior",
        stock: true,
    },
];

/// Loads the fixed catalog into the store. Runs at startup, either
/// automatically (empty product table) or forced via the `--init` flag.
/// Either way the whole load is one transaction; a failure rolls
/// everything back and aborts startup.
pub struct CatalogSeeder;

impl CatalogSeeder {
    /// Seed the catalog only when the product table is empty.
    #[instrument(name = "seed-if-empty", skip_all)]
    pub async fn seed_if_empty(db: &DatabaseConnection) -> Result<(), DbErr> {
        if Product::find().count(db).await? > 0 {
            return Ok(());
        }

        info!("Product table is empty, seeding initial catalog...");
        db.transaction::<_, (), DbErr>(|txn| Box::pin(async move { Self::insert_dataset(txn).await }))
            .await
            .map_err(unwrap_transaction_error)?;
        info!("Initial catalog seeded successfully");
        Ok(())
    }

    /// Forced reseed. Clears order items, orders, products and categories
    /// (in dependency order) before reloading the dataset, so prior orders
    /// do not survive an explicit re-initialization.
    #[instrument(name = "reseed", skip_all)]
    pub async fn reseed(db: &DatabaseConnection) -> Result<(), DbErr> {
        info!("Reseeding catalog, clearing existing data...");
        db.transaction::<_, (), DbErr>(|txn| {
            Box::pin(async move {
                OrderItem::delete_many().exec(txn).await?;
                Order::delete_many().exec(txn).await?;
                Product::delete_many().exec(txn).await?;
                Category::delete_many().exec(txn).await?;
                Self::insert_dataset(txn).await
            })
        })
        .await
        .map_err(unwrap_transaction_error)?;
        info!("Catalog reseeded successfully");
        Ok(())
    }

    /// Insert categories first, capture their assigned ids, then insert
    /// products resolving category name to id.
    async fn insert_dataset(txn: &DatabaseTransaction) -> Result<(), DbErr> {
        let mut category_ids_by_name: HashMap<&str, i32> = HashMap::new();
        for name in SEED_CATEGORIES {
            let inserted = CategoryActiveModel {
                name: Set(name.to_string()),
                ..Default::default()
            }
            .insert(txn)
            .await?;
            category_ids_by_name.insert(name, inserted.id);
        }

        for product in &SEED_PRODUCTS {
            let category_id = category_ids_by_name
                .get(product.category)
                .copied()
                .unwrap_or_default();
            ProductActiveModel {
                name: Set(product.name.to_string()),
                description: Set(product.description.to_string()),
                price: Set(product.price),
                image_url: Set(product.image_url.to_string()),
                watering: Set(product.watering.to_string()),
                light: Set(product.light.to_string()),
                category_id: Set(category_id),
                stock: Set(product.stock),
                ..Default::default()
            }
            .insert(txn)
            .await?;
        }

        Ok(())
    }
}

fn unwrap_transaction_error(e: TransactionError<DbErr>) -> DbErr {
    match e {
        TransactionError::Connection(db_err) => db_err,
        TransactionError::Transaction(db_err) => db_err,
    }
}
