//! Data access for the storefront tables.
//!
//! Every function takes the connection handle it should run against, so the same
//! call works on the shared pool or inside a caller's transaction.

pub mod category_repository;
pub mod product_repository;
pub mod wishlist_repository;
