pub mod categories;
pub mod products;
pub mod wishlists;
