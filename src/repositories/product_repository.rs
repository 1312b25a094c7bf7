use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

use crate::{
    entity::{
        products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
        wishlist_products::{self, Entity as WishlistProducts},
    },
    error::AppResult,
};

/// Writable product columns.
#[derive(Debug, Clone)]
pub struct ProductFields {
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub category_id: i32,
}

pub async fn find_all<C: ConnectionTrait>(db: &C) -> AppResult<Vec<ProductModel>> {
    let products = Products::find().order_by_asc(Column::Id).all(db).await?;
    Ok(products)
}

pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i32) -> AppResult<Option<ProductModel>> {
    let product = Products::find_by_id(id).one(db).await?;
    Ok(product)
}

pub async fn find_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> AppResult<Option<ProductModel>> {
    let product = Products::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(product)
}

pub async fn create<C: ConnectionTrait>(db: &C, fields: ProductFields) -> AppResult<ProductModel> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(fields.name),
        description: Set(fields.description),
        price: Set(fields.price),
        category_id: Set(fields.category_id),
        created_at: Set(Utc::now()),
    };
    Ok(active.insert(db).await?)
}

/// Copy `fields` onto the stored row. Returns `None` without writing when `id` is unknown.
pub async fn update<C: ConnectionTrait>(
    db: &C,
    id: i32,
    fields: ProductFields,
) -> AppResult<Option<ProductModel>> {
    let Some(existing) = find_by_id(db, id).await? else {
        return Ok(None);
    };
    let mut active: ActiveModel = existing.into();
    active.name = Set(fields.name);
    active.description = Set(fields.description);
    active.price = Set(fields.price);
    active.category_id = Set(fields.category_id);
    Ok(Some(active.update(db).await?))
}

/// Remove the product and its wishlist memberships in one transaction.
/// Returns whether the product existed.
pub async fn delete<C: TransactionTrait>(db: &C, id: i32) -> AppResult<bool> {
    let txn = db.begin().await?;
    WishlistProducts::delete_many()
        .filter(wishlist_products::Column::ProductId.eq(id))
        .exec(&txn)
        .await?;
    let result = Products::delete_by_id(id).exec(&txn).await?;
    txn.commit().await?;
    Ok(result.rows_affected > 0)
}
