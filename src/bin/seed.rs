use storefront_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    repositories::{
        category_repository,
        product_repository::{self, ProductFields},
        wishlist_repository,
    },
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    let apparel = ensure_category(&orm, "Apparel").await?;
    let kitchen = ensure_category(&orm, "Kitchen").await?;
    let stationery = ensure_category(&orm, "Stationery").await?;

    let products = [
        ("Axum Hoodie", "Warm hoodie for Rustaceans", 550000, apparel),
        ("Ferris Mug", "Coffee tastes better with Ferris", 120000, kitchen),
        ("Rust Sticker Pack", "Decorate your laptop", 50000, stationery),
    ];
    let mut product_ids = Vec::new();
    for (name, description, price, category_id) in products {
        product_ids.push(ensure_product(&orm, name, description, price, category_id).await?);
    }

    ensure_wishlist(&orm, "Birthday", &product_ids).await?;

    println!("Seed completed");
    Ok(())
}

async fn ensure_category(orm: &OrmConn, name: &str) -> anyhow::Result<i32> {
    let category = match category_repository::find_by_name(orm, name).await? {
        Some(existing) => existing,
        None => category_repository::create(orm, name.to_string()).await?,
    };
    println!("Ensured category {name} (id={})", category.id);
    Ok(category.id)
}

async fn ensure_product(
    orm: &OrmConn,
    name: &str,
    description: &str,
    price: i64,
    category_id: i32,
) -> anyhow::Result<i32> {
    let product = match product_repository::find_by_name(orm, name).await? {
        Some(existing) => existing,
        None => {
            let fields = ProductFields {
                name: name.to_string(),
                description: Some(description.to_string()),
                price,
                category_id,
            };
            product_repository::create(orm, fields).await?
        }
    };
    println!("Ensured product {name} (id={})", product.id);
    Ok(product.id)
}

async fn ensure_wishlist(orm: &OrmConn, name: &str, product_ids: &[i32]) -> anyhow::Result<()> {
    if wishlist_repository::find_by_name(orm, name).await?.is_none() {
        wishlist_repository::create(orm, name.to_string()).await?;
    }
    let mut wishlist = wishlist_repository::find_by_name_with_items(orm, name)
        .await?
        .ok_or_else(|| anyhow::anyhow!("wishlist {name} vanished while seeding"))?;

    for &product_id in product_ids {
        if wishlist.contains(product_id) {
            continue;
        }
        if let Some(product) = product_repository::find_by_id(orm, product_id).await? {
            wishlist_repository::add_product(orm, &mut wishlist, &product).await?;
        }
    }

    println!(
        "Ensured wishlist {name} with {} product(s)",
        wishlist.items.len()
    );
    Ok(())
}
