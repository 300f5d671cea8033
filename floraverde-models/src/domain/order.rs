use serde::Deserialize;

/// Order creation payload: customer fields, the client-computed total
/// and the line items. None of the business values are validated here,
/// the payload is persisted as supplied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewOrder {
    pub customer_name: String,
    pub customer_email: String,
    pub address: String,
    pub total: i64,
    pub items: Vec<NewOrderItem>,
}

/// A (product reference, quantity) pair within an order payload.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct NewOrderItem {
    pub product_id: i32,
    pub quantity: i32,
}
