use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entity::{
        categories::{ActiveModel, Column, Entity as Categories, Model as CategoryModel},
        products::{self, Entity as Products, Model as ProductModel},
    },
    error::AppResult,
};

pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<CategoryModel>> {
    let categories = Categories::find().order_by_asc(Column::Id).all(db).await?;
    Ok(categories)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<CategoryModel>> {
    let category = Categories::find_by_id(id).one(db).await?;
    Ok(category)
}

/// Category together with the products it owns.
pub async fn find_by_id_with_products<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> AppResult<Option<(CategoryModel, Vec<ProductModel>)>> {
    let Some(category) = find_by_id(db, id).await? else {
        return Ok(None);
    };
    let products = category
        .find_related(Products)
        .order_by_asc(products::Column::Id)
        .all(db)
        .await?;
    Ok(Some((category, products)))
}

pub async fn find_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> AppResult<Option<CategoryModel>> {
    let category = Categories::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(category)
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<bool> {
    let count = Categories::find_by_id(id).count(db).await?;
    Ok(count > 0)
}

pub async fn count_products<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<u64> {
    let count = Products::find()
        .filter(products::Column::CategoryId.eq(id))
        .count(db)
        .await?;
    Ok(count)
}

pub async fn create<C: ConnectionTrait>(db: &C, name: String) -> AppResult<CategoryModel> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(name),
        created_at: Set(Utc::now()),
    };
    Ok(active.insert(db).await?)
}

/// Copy `name` onto the stored row. Returns `None` without writing when `id` is unknown.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    name: String,
) -> AppResult<Option<CategoryModel>> {
    let Some(existing) = find_by_id(db, id).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.name = Set(name);
    Ok(Some(active.update(db).await?))
}

/// Returns whether a row was removed; an unknown id is a no-op.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<bool> {
    let result = Categories::delete_by_id(id).exec(db).await?;
    Ok(result.rows_affected > 0)
}
