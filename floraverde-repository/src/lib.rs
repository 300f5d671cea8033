pub mod category;
pub mod order;
pub mod product;

pub use category::CategoryRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
