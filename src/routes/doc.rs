use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        categories::{
            CategoryList, CategoryWithProducts, CreateCategoryRequest, UpdateCategoryRequest,
        },
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
        wishlists::{CreateWishlistRequest, WishlistList, WishlistWithProducts},
    },
    models::{Category, Product, Wishlist, WishlistProduct},
    response::ErrorResponse,
    routes::{categories, health, products, wishlists},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        wishlists::list_wishlists,
        wishlists::get_wishlist,
        wishlists::create_wishlist,
        wishlists::delete_wishlist,
        wishlists::add_product,
        wishlists::remove_product
    ),
    components(
        schemas(
            Category,
            Product,
            Wishlist,
            WishlistProduct,
            CategoryList,
            CategoryWithProducts,
            CreateCategoryRequest,
            UpdateCategoryRequest,
            ProductList,
            CreateProductRequest,
            UpdateProductRequest,
            WishlistList,
            WishlistWithProducts,
            CreateWishlistRequest,
            ErrorResponse
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Wishlists", description = "Wishlist and membership endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
