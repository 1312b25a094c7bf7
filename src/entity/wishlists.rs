use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "wishlists")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::wishlist_products::Entity")]
    WishlistProducts,
}

impl Related<super::wishlist_products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WishlistProducts.def()
    }
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        super::wishlist_products::Relation::Products.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::wishlist_products::Relation::Wishlists.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
