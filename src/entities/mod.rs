//! Entity module - Contains all SeaORM entity definitions for the catalog.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod category;
pub mod category_product;
pub mod product;
pub mod product_image;

// Re-export specific types to avoid conflicts
pub use category::{Column as CategoryColumn, Entity as Category, Model as CategoryModel};
pub use category_product::{
    Column as CategoryProductColumn, Entity as CategoryProduct, Model as CategoryProductModel,
};
pub use product::{Column as ProductColumn, Entity as Product, Model as ProductModel};
pub use product_image::{
    Column as ProductImageColumn, Entity as ProductImage, Model as ProductImageModel,
};
