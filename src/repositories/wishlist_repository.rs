use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, ConnectionTrait, EntityTrait, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use crate::{
    entity::{
        products::{self, Entity as Products, Model as ProductModel},
        wishlist_products::{
            self, ActiveModel as MembershipActive, Entity as WishlistProducts,
            Model as MembershipModel,
        },
        wishlists::{ActiveModel, Column, Entity as Wishlists, Model as WishlistModel},
    },
    error::{AppError, AppResult},
};

/// A wishlist loaded together with its membership rows.
///
/// `add_product` and `remove_product` keep `items` in step with the table, so the
/// value stays usable after a mutation.
#[derive(Debug, Clone)]
pub struct WishlistWithItems {
    pub wishlist: WishlistModel,
    pub items: Vec<MembershipModel>,
}

impl WishlistWithItems {
    pub fn contains(&self, product_id: i32) -> bool {
        self.items.iter().any(|item| item.product_id == product_id)
    }
}

pub async fn find_all_with_products<C: ConnectionTrait>(
    db: &C,
) -> AppResult<Vec<(WishlistModel, Vec<ProductModel>)>> {
    let wishlists = Wishlists::find()
        .find_with_related(Products)
        .order_by_asc(Column::Id)
        .order_by_asc(products::Column::Id)
        .all(db)
        .await?;
    Ok(wishlists)
}

pub async fn find_by_name<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> AppResult<Option<WishlistModel>> {
    let wishlist = Wishlists::find()
        .filter(Column::Name.eq(name))
        .one(db)
        .await?;
    Ok(wishlist)
}

pub async fn find_by_name_with_items<C: ConnectionTrait>(
    db: &C,
    name: &str,
) -> AppResult<Option<WishlistWithItems>> {
    let Some(wishlist) = find_by_name(db, name).await? else {
        return Ok(None);
    };
    let items = wishlist
        .find_related(WishlistProducts)
        .order_by_asc(wishlist_products::Column::ProductId)
        .all(db)
        .await?;
    Ok(Some(WishlistWithItems { wishlist, items }))
}

pub async fn products_of<C: ConnectionTrait>(
    db: &C,
    wishlist: &WishlistModel,
) -> AppResult<Vec<ProductModel>> {
    let products = wishlist
        .find_related(Products)
        .order_by_asc(products::Column::Id)
        .all(db)
        .await?;
    Ok(products)
}

pub async fn create<C: ConnectionTrait>(db: &C, name: String) -> AppResult<WishlistModel> {
    let active = ActiveModel {
        id: NotSet,
        name: Set(name),
        created_at: Set(Utc::now()),
    };
    Ok(active.insert(db).await?)
}

pub async fn contains_product<C: ConnectionTrait>(
    db: &C,
    wishlist_id: i32,
    product_id: i32,
) -> AppResult<bool> {
    let count = WishlistProducts::find_by_id((wishlist_id, product_id))
        .count(db)
        .await?;
    Ok(count > 0)
}

/// Insert the membership row for `product` and record it in `wishlist.items`.
///
/// A concurrent insert of the same pair trips the composite key and surfaces as `Conflict`.
pub async fn add_product<C: ConnectionTrait>(
    db: &C,
    wishlist: &mut WishlistWithItems,
    product: &ProductModel,
) -> AppResult<MembershipModel> {
    let active = MembershipActive {
        wishlist_id: Set(wishlist.wishlist.id),
        product_id: Set(product.id),
        created_at: Set(Utc::now()),
    };
    let membership = active
        .insert(db)
        .await
        .map_err(|err| AppError::conflict_on_unique(err, "Product is already in the wishlist."))?;
    wishlist.items.push(membership.clone());
    Ok(membership)
}

/// Drop `product_id` from the loaded collection and delete its row.
/// Returns `false` without touching the database when the product is not a member.
pub async fn remove_product<C: ConnectionTrait>(
    db: &C,
    wishlist: &mut WishlistWithItems,
    product_id: i32,
) -> AppResult<bool> {
    let Some(position) = wishlist
        .items
        .iter()
        .position(|item| item.product_id == product_id)
    else {
        return Ok(false);
    };
    let membership = wishlist.items.remove(position);
    membership.delete(db).await?;
    Ok(true)
}

/// Delete the wishlist named `name` together with its membership rows.
pub async fn delete_by_name<C: TransactionTrait>(db: &C, name: &str) -> AppResult<WishlistModel> {
    let txn = db.begin().await?;
    let Some(wishlist) = find_by_name(&txn, name).await? else {
        return Err(AppError::not_found(format!("Wishlist '{name}' not found.")));
    };

    WishlistProducts::delete_many()
        .filter(wishlist_products::Column::WishlistId.eq(wishlist.id))
        .exec(&txn)
        .await?;
    Wishlists::delete_by_id(wishlist.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(wishlist)
}
