pub use super::common::IdQuery;
pub use super::order::{NewOrder, NewOrderItem};
pub use super::product::{ProductInfo, ProductListQuery, ProductPayload};
