use crate::{
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    error::{AppError, AppResult},
    models::Product,
    repositories::{
        category_repository,
        product_repository::{self, ProductFields},
    },
    response::ApiResponse,
    services::{ensure_ids_match, required_name},
    state::AppState,
};

pub async fn list_products(state: &AppState) -> AppResult<ApiResponse<ProductList>> {
    let items: Vec<Product> = product_repository::find_all(&state.orm)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    tracing::info!(count = items.len(), "retrieved all products");
    Ok(ApiResponse::success("Success", ProductList { items }))
}

pub async fn get_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let Some(product) = product_repository::find_by_id(&state.orm, id).await? else {
        tracing::warn!(product_id = id, "product not found");
        return Err(not_found(id));
    };

    tracing::info!(product_id = id, "retrieved product");
    Ok(ApiResponse::success("Success", product.into()))
}

pub async fn create_product(
    state: &AppState,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    let name = required_name(&payload.name, "Product")?;
    ensure_price(payload.price)?;

    if product_repository::find_by_name(&state.orm, &name)
        .await?
        .is_some()
    {
        tracing::warn!(product_name = %name, "product already exists");
        return Err(AppError::conflict(duplicate_message(&name)));
    }

    ensure_category(state, payload.category_id).await?;

    let fields = ProductFields {
        name: name.clone(),
        description: payload.description,
        price: payload.price,
        category_id: payload.category_id,
    };
    let product = product_repository::create(&state.orm, fields)
        .await
        .map_err(|err| err.unique_as_conflict(duplicate_message(&name)))?;

    tracing::info!(product_id = product.id, product_name = %product.name, "created product");
    Ok(ApiResponse::success(
        "Product created successfully.",
        product.into(),
    ))
}

pub async fn update_product(
    state: &AppState,
    id: i32,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    ensure_ids_match("Product", id, payload.id)?;
    let name = required_name(&payload.name, "Product")?;
    ensure_price(payload.price)?;

    let Some(existing) = product_repository::find_by_id(&state.orm, id).await? else {
        tracing::warn!(product_id = id, "product not found");
        return Err(not_found(id));
    };

    ensure_category(state, payload.category_id).await?;

    if let Some(other) = product_repository::find_by_name(&state.orm, &name).await? {
        if other.id != id {
            tracing::warn!(product_id = id, product_name = %name, "product name taken");
            return Err(AppError::conflict(duplicate_message(&name)));
        }
    }

    let fields = ProductFields {
        name: name.clone(),
        description: payload.description.or(existing.description),
        price: payload.price,
        category_id: payload.category_id,
    };
    let updated = product_repository::update(&state.orm, id, fields)
        .await
        .map_err(|err| err.unique_as_conflict(duplicate_message(&name)))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(product_id = id, "updated product");
    Ok(ApiResponse::success(
        format!("Product ID {id} updated successfully"),
        updated.into(),
    ))
}

pub async fn delete_product(state: &AppState, id: i32) -> AppResult<ApiResponse<Product>> {
    let Some(product) = product_repository::find_by_id(&state.orm, id).await? else {
        tracing::warn!(product_id = id, "product not found");
        return Err(not_found(id));
    };

    product_repository::delete(&state.orm, id).await?;

    tracing::info!(product_id = id, "deleted product");
    Ok(ApiResponse::success(
        format!("Product ID {id} deleted successfully."),
        product.into(),
    ))
}

async fn ensure_category(state: &AppState, category_id: i32) -> AppResult<()> {
    if !category_repository::exists(&state.orm, category_id).await? {
        tracing::warn!(category_id, "referenced category not found");
        return Err(AppError::bad_request(format!(
            "Category with ID {category_id} not found"
        )));
    }
    Ok(())
}

fn ensure_price(price: i64) -> AppResult<()> {
    if price < 0 {
        tracing::warn!(price, "negative price rejected");
        return Err(AppError::bad_request("Price must not be negative."));
    }
    Ok(())
}

fn not_found(id: i32) -> AppError {
    AppError::not_found(format!("Product with ID {id} not found"))
}

fn duplicate_message(name: &str) -> String {
    format!("Product with name '{name}' already exists.")
}
