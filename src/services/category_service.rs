use crate::{
    dto::categories::{
        CategoryList, CategoryWithProducts, CreateCategoryRequest, UpdateCategoryRequest,
    },
    error::{AppError, AppResult},
    models::Category,
    repositories::category_repository,
    response::ApiResponse,
    services::{ensure_ids_match, required_name},
    state::AppState,
};

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items: Vec<Category> = category_repository::find_all(&state.orm)
        .await?
        .into_iter()
        .map(Category::from)
        .collect();

    tracing::info!(count = items.len(), "retrieved all categories");
    Ok(ApiResponse::success(
        "Successfully retrieved all categories",
        CategoryList { items },
    ))
}

pub async fn get_category(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<CategoryWithProducts>> {
    let Some((category, products)) =
        category_repository::find_by_id_with_products(&state.orm, id).await?
    else {
        tracing::warn!(category_id = id, "category not found");
        return Err(not_found(id));
    };

    tracing::info!(category_id = id, "retrieved category");
    let data = CategoryWithProducts::new(
        category.into(),
        products.into_iter().map(Into::into).collect(),
    );
    Ok(ApiResponse::success("Success", data))
}

pub async fn create_category(
    state: &AppState,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let name = required_name(&payload.name, "Category")?;

    if category_repository::find_by_name(&state.orm, &name)
        .await?
        .is_some()
    {
        tracing::warn!(category_name = %name, "category already exists");
        return Err(duplicate(&name));
    }

    let category = category_repository::create(&state.orm, name.clone())
        .await
        .map_err(|err| err.unique_as_conflict(duplicate_message(&name)))?;

    tracing::info!(category_id = category.id, category_name = %category.name, "created category");
    Ok(ApiResponse::success(
        "Category created successfully.",
        category.into(),
    ))
}

pub async fn update_category(
    state: &AppState,
    id: i32,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    ensure_ids_match("Category", id, payload.id)?;
    let name = required_name(&payload.name, "Category")?;

    if category_repository::find_by_id(&state.orm, id).await?.is_none() {
        tracing::warn!(category_id = id, "category not found");
        return Err(not_found(id));
    }

    if let Some(other) = category_repository::find_by_name(&state.orm, &name).await? {
        if other.id != id {
            tracing::warn!(category_id = id, category_name = %name, "category name taken");
            return Err(duplicate(&name));
        }
    }

    let updated = category_repository::update(&state.orm, id, name.clone())
        .await
        .map_err(|err| err.unique_as_conflict(duplicate_message(&name)))?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(category_id = id, "updated category");
    Ok(ApiResponse::success(
        format!("Category ID {id} updated successfully"),
        updated.into(),
    ))
}

pub async fn delete_category(state: &AppState, id: i32) -> AppResult<ApiResponse<Category>> {
    let Some(category) = category_repository::find_by_id(&state.orm, id).await? else {
        tracing::warn!(category_id = id, "category not found");
        return Err(not_found(id));
    };

    let owned = category_repository::count_products(&state.orm, id).await?;
    if owned > 0 {
        tracing::warn!(category_id = id, products = owned, "category still has products");
        return Err(AppError::conflict(format!(
            "Category ID {id} still has {owned} product(s)."
        )));
    }

    category_repository::delete(&state.orm, id).await?;

    tracing::info!(category_id = id, "deleted category");
    Ok(ApiResponse::success(
        format!("Category ID {id} deleted successfully."),
        category.into(),
    ))
}

fn not_found(id: i32) -> AppError {
    AppError::not_found(format!("Category with ID {id} not found"))
}

fn duplicate(name: &str) -> AppError {
    AppError::conflict(duplicate_message(name))
}

fn duplicate_message(name: &str) -> String {
    format!("Category with name '{name}' already exists.")
}
