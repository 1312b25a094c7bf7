#![allow(dead_code)]

use storefront_api::{
    db::create_in_memory_conn,
    entity::{categories, products},
    repositories::{
        category_repository,
        product_repository::{self, ProductFields},
    },
    state::AppState,
};

/// Fresh in-memory database with the schema applied.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let orm = create_in_memory_conn().await?;
    Ok(AppState { orm })
}

pub async fn seed_category(state: &AppState, name: &str) -> anyhow::Result<categories::Model> {
    Ok(category_repository::create(&state.orm, name.to_string()).await?)
}

pub async fn seed_product(
    state: &AppState,
    name: &str,
    category_id: i32,
) -> anyhow::Result<products::Model> {
    let fields = ProductFields {
        name: name.to_string(),
        description: Some(format!("{name} description")),
        price: 1000,
        category_id,
    };
    Ok(product_repository::create(&state.orm, fields).await?)
}
