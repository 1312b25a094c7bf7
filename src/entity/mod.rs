pub mod categories;
pub mod products;
pub mod wishlist_products;
pub mod wishlists;

pub use categories::Entity as Categories;
pub use products::Entity as Products;
pub use wishlist_products::Entity as WishlistProducts;
pub use wishlists::Entity as Wishlists;
