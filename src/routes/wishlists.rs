use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{get, post},
};

use crate::{
    dto::wishlists::{CreateWishlistRequest, WishlistList, WishlistWithProducts},
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::{Wishlist, WishlistProduct},
    response::{ApiResponse, ErrorResponse},
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlists).post(create_wishlist))
        .route("/{name}", get(get_wishlist).delete(delete_wishlist))
        .route(
            "/{name}/products/{product_id}",
            post(add_product).delete(remove_product),
        )
}

#[utoipa::path(
    get,
    path = "/api/wishlists",
    responses(
        (status = 200, description = "List wishlists with their products", body = ApiResponse<WishlistList>),
        (status = 500, description = "Internal Server Error", body = ErrorResponse),
    ),
    tag = "Wishlists"
)]
pub async fn list_wishlists(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<WishlistList>>> {
    let resp = wishlist_service::list_wishlists(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/wishlists/{name}",
    params(
        ("name" = String, Path, description = "Wishlist name")
    ),
    responses(
        (status = 200, description = "Wishlist with its products", body = ApiResponse<WishlistWithProducts>),
        (status = 404, description = "Wishlist not found", body = ErrorResponse),
    ),
    tag = "Wishlists"
)]
pub async fn get_wishlist(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> AppResult<Json<ApiResponse<WishlistWithProducts>>> {
    let resp = wishlist_service::get_wishlist(&state, &name).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/wishlists",
    request_body = CreateWishlistRequest,
    responses(
        (status = 201, description = "Wishlist created", body = ApiResponse<Wishlist>),
        (status = 400, description = "Blank name", body = ErrorResponse),
        (status = 409, description = "Name already taken", body = ErrorResponse),
    ),
    tag = "Wishlists"
)]
pub async fn create_wishlist(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateWishlistRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<Wishlist>>)> {
    let resp = wishlist_service::create_wishlist(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/api/wishlists/{name}",
    params(
        ("name" = String, Path, description = "Wishlist name")
    ),
    responses(
        (status = 200, description = "Wishlist and its memberships deleted", body = ApiResponse<Wishlist>),
        (status = 404, description = "Wishlist not found", body = ErrorResponse),
    ),
    tag = "Wishlists"
)]
pub async fn delete_wishlist(
    State(state): State<AppState>,
    ApiPath(name): ApiPath<String>,
) -> AppResult<Json<ApiResponse<Wishlist>>> {
    let resp = wishlist_service::delete_wishlist(&state, &name).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/wishlists/{name}/products/{product_id}",
    params(
        ("name" = String, Path, description = "Wishlist name"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 201, description = "Product added to wishlist", body = ApiResponse<WishlistProduct>),
        (status = 404, description = "Wishlist or product not found", body = ErrorResponse),
        (status = 409, description = "Product already in wishlist", body = ErrorResponse),
    ),
    tag = "Wishlists"
)]
pub async fn add_product(
    State(state): State<AppState>,
    ApiPath((name, product_id)): ApiPath<(String, i32)>,
) -> AppResult<(StatusCode, Json<ApiResponse<WishlistProduct>>)> {
    let resp = wishlist_service::add_product(&state, &name, product_id).await?;
    Ok((StatusCode::CREATED, Json(resp)))
}

#[utoipa::path(
    delete,
    path = "/api/wishlists/{name}/products/{product_id}",
    params(
        ("name" = String, Path, description = "Wishlist name"),
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product removed, or was not a member", body = ApiResponse<WishlistWithProducts>),
        (status = 404, description = "Wishlist not found", body = ErrorResponse),
    ),
    tag = "Wishlists"
)]
pub async fn remove_product(
    State(state): State<AppState>,
    ApiPath((name, product_id)): ApiPath<(String, i32)>,
) -> AppResult<Json<ApiResponse<WishlistWithProducts>>> {
    let resp = wishlist_service::remove_product(&state, &name, product_id).await?;
    Ok(Json(resp))
}
