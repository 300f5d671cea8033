use floraverde_error::{storage::StorageError, StorageResult};
use floraverde_models::{
    domain::prelude::NewOrder,
    entities::prelude::{OrderActiveModel, OrderItemActiveModel},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};

/// Repository for order creation. Orders are write-only: never read
/// back, updated or deleted by this system.
#[derive(Clone)]
pub struct OrderRepository {
    db: DatabaseConnection,
}

impl OrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Insert the order header and every line item as one atomic unit.
    /// Any failed item insert rolls back the whole order, header
    /// included. Returns the assigned order id.
    pub async fn create(&self, order: NewOrder) -> StorageResult<i32> {
        let order_id = self
            .db
            .transaction::<_, i32, StorageError>(|txn| {
                Box::pin(async move {
                    let header = OrderActiveModel {
                        customer_name: Set(order.customer_name),
                        customer_email: Set(order.customer_email),
                        address: Set(order.address),
                        total: Set(order.total),
                        created_at: Set(Some(chrono::Utc::now())),
                        ..Default::default()
                    }
                    .insert(txn)
                    .await?;

                    for item in order.items {
                        OrderItemActiveModel {
                            order_id: Set(header.id),
                            product_id: Set(item.product_id),
                            quantity: Set(item.quantity),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;
                    }

                    Ok(header.id)
                })
            })
            .await
            .map_err(StorageError::from)?;

        Ok(order_id)
    }
}
