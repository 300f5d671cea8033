pub use super::category::{
    ActiveModel as CategoryActiveModel, Column as CategoryColumn, Entity as Category,
    Model as CategoryModel,
};
pub use super::order::{
    ActiveModel as OrderActiveModel, Column as OrderColumn, Entity as Order, Model as OrderModel,
};
pub use super::order_item::{
    ActiveModel as OrderItemActiveModel, Column as OrderItemColumn, Entity as OrderItem,
    Model as OrderItemModel,
};
pub use super::product::{
    ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as Product,
    Model as ProductModel,
};
