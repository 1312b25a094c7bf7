use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Product, Wishlist};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWishlistRequest {
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistWithProducts {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub products: Vec<Product>,
}

impl WishlistWithProducts {
    pub fn new(wishlist: Wishlist, products: Vec<Product>) -> Self {
        Self {
            id: wishlist.id,
            name: wishlist.name,
            created_at: wishlist.created_at,
            products,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct WishlistList {
    #[schema(value_type = Vec<WishlistWithProducts>)]
    pub items: Vec<WishlistWithProducts>,
}
