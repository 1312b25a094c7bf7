use crate::{
    dto::wishlists::{CreateWishlistRequest, WishlistList, WishlistWithProducts},
    error::{AppError, AppResult},
    models::{Wishlist, WishlistProduct},
    repositories::{product_repository, wishlist_repository},
    response::ApiResponse,
    services::required_name,
    state::AppState,
};

pub async fn list_wishlists(state: &AppState) -> AppResult<ApiResponse<WishlistList>> {
    let items: Vec<WishlistWithProducts> =
        wishlist_repository::find_all_with_products(&state.orm)
            .await?
            .into_iter()
            .map(|(wishlist, products)| {
                WishlistWithProducts::new(
                    wishlist.into(),
                    products.into_iter().map(Into::into).collect(),
                )
            })
            .collect();

    tracing::info!(count = items.len(), "retrieved all wishlists");
    Ok(ApiResponse::success(
        "Successfully retrieved all wishlists",
        WishlistList { items },
    ))
}

pub async fn get_wishlist(
    state: &AppState,
    name: &str,
) -> AppResult<ApiResponse<WishlistWithProducts>> {
    let Some(wishlist) = wishlist_repository::find_by_name(&state.orm, name).await? else {
        tracing::warn!(wishlist = %name, "wishlist not found");
        return Err(not_found(name));
    };
    let products = wishlist_repository::products_of(&state.orm, &wishlist).await?;

    tracing::info!(wishlist = %name, products = products.len(), "retrieved wishlist");
    Ok(ApiResponse::success(
        "Successfully retrieved the wishlist",
        WishlistWithProducts::new(
            wishlist.into(),
            products.into_iter().map(Into::into).collect(),
        ),
    ))
}

pub async fn create_wishlist(
    state: &AppState,
    payload: CreateWishlistRequest,
) -> AppResult<ApiResponse<Wishlist>> {
    let name = required_name(&payload.name, "Wishlist")?;

    if wishlist_repository::find_by_name(&state.orm, &name)
        .await?
        .is_some()
    {
        tracing::warn!(wishlist = %name, "wishlist already exists");
        return Err(AppError::conflict(DUPLICATE_NAME));
    }

    let wishlist = wishlist_repository::create(&state.orm, name)
        .await
        .map_err(|err| err.unique_as_conflict(DUPLICATE_NAME))?;

    tracing::info!(wishlist_id = wishlist.id, wishlist = %wishlist.name, "created wishlist");
    Ok(ApiResponse::success(
        "Wishlist created successfully.",
        wishlist.into(),
    ))
}

/// Add `product_id` to the wishlist named `name`. Each product can be a member once.
pub async fn add_product(
    state: &AppState,
    name: &str,
    product_id: i32,
) -> AppResult<ApiResponse<WishlistProduct>> {
    let Some(mut wishlist) = wishlist_repository::find_by_name_with_items(&state.orm, name).await?
    else {
        tracing::warn!(wishlist = %name, "wishlist not found");
        return Err(not_found(name));
    };

    let Some(product) = product_repository::find_by_id(&state.orm, product_id).await? else {
        tracing::warn!(product_id, "product not found");
        return Err(AppError::not_found(format!(
            "Product with ID {product_id} not found."
        )));
    };

    if wishlist_repository::contains_product(&state.orm, wishlist.wishlist.id, product_id).await? {
        tracing::warn!(wishlist = %name, product_id, "product already in wishlist");
        return Err(AppError::conflict(ALREADY_MEMBER));
    }

    let membership = wishlist_repository::add_product(&state.orm, &mut wishlist, &product).await?;

    tracing::info!(
        wishlist = %name,
        product_id,
        members = wishlist.items.len(),
        "product added to wishlist"
    );
    Ok(ApiResponse::success(
        "Product added to wishlist successfully.",
        membership.into(),
    ))
}

/// Remove `product_id` from the wishlist named `name`. Removing a non-member succeeds.
pub async fn remove_product(
    state: &AppState,
    name: &str,
    product_id: i32,
) -> AppResult<ApiResponse<WishlistWithProducts>> {
    let Some(mut wishlist) = wishlist_repository::find_by_name_with_items(&state.orm, name).await?
    else {
        tracing::warn!(wishlist = %name, "wishlist not found");
        return Err(not_found(name));
    };

    let removed =
        wishlist_repository::remove_product(&state.orm, &mut wishlist, product_id).await?;
    let message = if removed {
        tracing::info!(wishlist = %name, product_id, "product removed from wishlist");
        "Product removed from wishlist successfully."
    } else {
        tracing::info!(wishlist = %name, product_id, "product was not in wishlist");
        "Product is not in the wishlist; nothing to remove."
    };

    let products = wishlist_repository::products_of(&state.orm, &wishlist.wishlist).await?;
    Ok(ApiResponse::success(
        message,
        WishlistWithProducts::new(
            wishlist.wishlist.into(),
            products.into_iter().map(Into::into).collect(),
        ),
    ))
}

pub async fn delete_wishlist(state: &AppState, name: &str) -> AppResult<ApiResponse<Wishlist>> {
    let wishlist = wishlist_repository::delete_by_name(&state.orm, name)
        .await
        .inspect_err(|err| {
            if matches!(err, AppError::NotFound(_)) {
                tracing::warn!(wishlist = %name, "wishlist not found");
            }
        })?;

    tracing::info!(wishlist_id = wishlist.id, wishlist = %name, "deleted wishlist");
    Ok(ApiResponse::success(
        "Wishlist deleted successfully.",
        wishlist.into(),
    ))
}

const DUPLICATE_NAME: &str = "Wishlist with this name already exists.";
const ALREADY_MEMBER: &str = "Product is already in the wishlist.";

fn not_found(name: &str) -> AppError {
    AppError::not_found(format!("Wishlist '{name}' not found."))
}
