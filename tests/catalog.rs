mod common;

use sea_orm::{EntityTrait, PaginatorTrait};
use storefront_api::{
    dto::{
        categories::{CreateCategoryRequest, UpdateCategoryRequest},
        products::{CreateProductRequest, UpdateProductRequest},
    },
    entity::{Categories, Products},
    error::AppError,
    repositories::{
        category_repository,
        product_repository::{self, ProductFields},
    },
    services::{category_service, product_service},
};

use common::{seed_category, seed_product, setup_state};

fn product_request(name: &str, category_id: i32) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        description: Some("A product for testing".to_string()),
        price: 2500,
        category_id,
    }
}

#[tokio::test]
async fn empty_tables_list_as_empty_arrays() -> anyhow::Result<()> {
    let state = setup_state().await?;

    let categories = category_service::list_categories(&state).await?;
    assert!(categories.data.expect("categories").items.is_empty());

    let products = product_service::list_products(&state).await?;
    assert!(products.data.expect("products").items.is_empty());
    Ok(())
}

#[tokio::test]
async fn category_names_are_unique() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let created = category_service::create_category(
        &state,
        CreateCategoryRequest {
            name: "Books".into(),
        },
    )
    .await?;
    assert_eq!(created.message, "Category created successfully.");

    let err = category_service::create_category(
        &state,
        CreateCategoryRequest {
            name: "Books".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(
        matches!(err, AppError::Conflict(msg) if msg == "Category with name 'Books' already exists.")
    );

    let err = category_service::create_category(&state, CreateCategoryRequest { name: "".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));
    Ok(())
}

#[tokio::test]
async fn category_update_rules() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    seed_category(&state, "Music").await?;

    let err = category_service::update_category(
        &state,
        books.id,
        UpdateCategoryRequest {
            id: books.id + 1,
            name: "Novels".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = category_service::update_category(
        &state,
        999,
        UpdateCategoryRequest {
            id: 999,
            name: "Novels".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    let err = category_service::update_category(
        &state,
        books.id,
        UpdateCategoryRequest {
            id: books.id,
            name: "Music".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let updated = category_service::update_category(
        &state,
        books.id,
        UpdateCategoryRequest {
            id: books.id,
            name: "Novels".into(),
        },
    )
    .await?;
    assert_eq!(updated.data.expect("category").name, "Novels");
    Ok(())
}

#[tokio::test]
async fn category_delete_guards_owned_products() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let empty = seed_category(&state, "Empty").await?;
    seed_product(&state, "Rust Book", books.id).await?;

    let err = category_service::delete_category(&state, books.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    category_service::delete_category(&state, empty.id).await?;
    let err = category_service::delete_category(&state, empty.id)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));

    assert_eq!(Categories::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn category_detail_lists_its_products() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let music = seed_category(&state, "Music").await?;
    let book = seed_product(&state, "Rust Book", books.id).await?;
    seed_product(&state, "Vinyl", music.id).await?;

    let detail = category_service::get_category(&state, books.id)
        .await?
        .data
        .expect("category");
    assert_eq!(detail.name, "Books");
    let ids: Vec<i32> = detail.products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![book.id]);

    let err = category_service::get_category(&state, 999).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(msg) if msg == "Category with ID 999 not found"));
    Ok(())
}

#[tokio::test]
async fn product_create_validates_name_and_category() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;

    let created = product_service::create_product(&state, product_request("Rust Book", books.id))
        .await?
        .data
        .expect("product");
    assert_eq!(created.category_id, books.id);
    assert_eq!(created.price, 2500);

    let err = product_service::create_product(&state, product_request("Rust Book", books.id))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    let err = product_service::create_product(&state, product_request("Orphan", 999))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(msg) if msg == "Category with ID 999 not found"));

    let mut negative = product_request("Negative", books.id);
    negative.price = -1;
    let err = product_service::create_product(&state, negative)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    assert_eq!(Products::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn product_update_copies_fields() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let music = seed_category(&state, "Music").await?;
    let product = seed_product(&state, "Rust Book", books.id).await?;

    let updated = product_service::update_product(
        &state,
        product.id,
        UpdateProductRequest {
            id: product.id,
            name: "Rust Audiobook".into(),
            description: None,
            price: 4200,
            category_id: music.id,
        },
    )
    .await?
    .data
    .expect("product");
    assert_eq!(updated.name, "Rust Audiobook");
    assert_eq!(updated.price, 4200);
    assert_eq!(updated.category_id, music.id);
    // Omitted description keeps the stored one.
    assert_eq!(updated.description, product.description);

    let err = product_service::update_product(
        &state,
        product.id,
        UpdateProductRequest {
            id: product.id,
            name: "Rust Audiobook".into(),
            description: None,
            price: 4200,
            category_id: 999,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::BadRequest(_)));

    let err = product_service::update_product(
        &state,
        999,
        UpdateProductRequest {
            id: 999,
            name: "Ghost".into(),
            description: None,
            price: 1,
            category_id: books.id,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
    Ok(())
}

#[tokio::test]
async fn product_rename_onto_taken_name_conflicts() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;
    let rust_book = seed_product(&state, "Rust Book", books.id).await?;
    seed_product(&state, "Go Book", books.id).await?;

    let err = product_service::update_product(
        &state,
        rust_book.id,
        UpdateProductRequest {
            id: rust_book.id,
            name: "Go Book".into(),
            description: None,
            price: 10,
            category_id: books.id,
        },
    )
    .await
    .unwrap_err();
    assert!(
        matches!(err, AppError::Conflict(msg) if msg == "Product with name 'Go Book' already exists.")
    );

    // Keeping its own name is not a collision.
    let same = product_service::update_product(
        &state,
        rust_book.id,
        UpdateProductRequest {
            id: rust_book.id,
            name: "Rust Book".into(),
            description: None,
            price: 10,
            category_id: books.id,
        },
    )
    .await?
    .data
    .expect("product");
    assert_eq!(same.name, "Rust Book");
    assert_eq!(same.price, 10);
    Ok(())
}

#[tokio::test]
async fn repository_writes_on_missing_rows_are_no_ops() -> anyhow::Result<()> {
    let state = setup_state().await?;
    let books = seed_category(&state, "Books").await?;

    let fields = ProductFields {
        name: "Ghost".into(),
        description: None,
        price: 1,
        category_id: books.id,
    };
    assert!(product_repository::update(&state.orm, 999, fields).await?.is_none());
    assert!(!product_repository::delete(&state.orm, 999).await?);
    assert_eq!(Products::find().count(&state.orm).await?, 0);

    assert!(
        category_repository::update(&state.orm, 999, "Ghost".into())
            .await?
            .is_none()
    );
    assert!(!category_repository::delete(&state.orm, 999).await?);
    assert_eq!(Categories::find().count(&state.orm).await?, 1);
    Ok(())
}
