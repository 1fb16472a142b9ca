/// Category operations and product membership
pub mod category;
/// Product image operations
pub mod image;
/// Product operations
pub mod product;
/// Seeding the catalog from configuration
pub mod seed;
/// Slug generation
pub mod slug;
/// Named-route reversal
pub mod urls;
