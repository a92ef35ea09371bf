use rust_decimal::Decimal;
use uuid::Uuid;

use shelf_catalog::error::CatalogServiceError;
use shelf_catalog::usecase::product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    ProductInput, UpdateProductUseCase,
};

use crate::helpers::MemStore;

fn input(sku: &str, name: &str, price: Decimal) -> ProductInput {
    ProductInput {
        sku: sku.to_owned(),
        name: name.to_owned(),
        description: Some("A thing".to_owned()),
        price,
        stock: 5,
    }
}

// ── CreateProductUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_product_and_read_it_back() {
    let store = MemStore::default();
    let create = CreateProductUseCase {
        products: store.products(),
    };
    let product = create
        .execute(input("X1", "Widget", Decimal::new(999, 2)))
        .await
        .unwrap();

    let get = GetProductUseCase {
        products: store.products(),
    };
    let detail = get.execute(&product.id.to_string()).await.unwrap();
    assert_eq!(detail.product.name, "Widget");
    assert_eq!(detail.product.price, Decimal::new(999, 2));
    assert!(detail.images.is_empty());
    assert!(detail.reviews.is_empty());
}

#[tokio::test]
async fn should_round_price_to_two_decimals() {
    let store = MemStore::default();
    let create = CreateProductUseCase {
        products: store.products(),
    };
    let product = create
        .execute(input("X1", "Widget", Decimal::new(99_999, 4)))
        .await
        .unwrap();
    assert_eq!(product.price, Decimal::new(1000, 2));

    let half_cent = create
        .execute(input("X2", "Gadget", Decimal::new(125, 3)))
        .await
        .unwrap();
    assert_eq!(half_cent.price, Decimal::new(13, 2));
}

#[tokio::test]
async fn should_reject_duplicate_sku() {
    let store = MemStore::default();
    let create = CreateProductUseCase {
        products: store.products(),
    };
    create
        .execute(input("X1", "Widget", Decimal::ONE))
        .await
        .unwrap();
    let result = create
        .execute(input("X1", "Gadget", Decimal::ONE))
        .await;
    assert!(
        matches!(result, Err(CatalogServiceError::Conflict("SKU already exists"))),
        "expected Conflict, got {result:?}"
    );
}

#[tokio::test]
async fn should_report_missing_fields_in_declared_order() {
    let create = CreateProductUseCase {
        products: MemStore::default().products(),
    };
    let cases = [
        (input("", "", Decimal::ZERO), "SKU is required"),
        (input("", "Widget", Decimal::ONE), "SKU is required"),
        (input("X1", "", Decimal::ONE), "Name is required"),
    ];
    for (case, expected) in cases {
        let err = create.execute(case).await.unwrap_err();
        assert_eq!(err.to_string(), expected);
    }
}

// ── ListProductsUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_empty_catalog_as_success() {
    let list = ListProductsUseCase {
        products: MemStore::default().products(),
    };
    assert!(list.execute().await.unwrap().is_empty());
}

// ── GetProductUseCase ────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reject_malformed_ids_as_validation() {
    let get = GetProductUseCase {
        products: MemStore::default().products(),
    };
    for raw in ["", "abc", "123", "00000000-0000-0000-0000-00000000000Z"] {
        let result = get.execute(raw).await;
        assert!(
            matches!(result, Err(CatalogServiceError::Validation(_))),
            "id {raw:?} gave {result:?}"
        );
    }
}

#[tokio::test]
async fn should_report_unknown_product_as_not_found() {
    let get = GetProductUseCase {
        products: MemStore::default().products(),
    };
    let result = get.execute(&Uuid::now_v7().to_string()).await;
    assert!(matches!(result, Err(CatalogServiceError::ProductNotFound)));
}

// ── UpdateProductUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_stored_fields_on_update() {
    let store = MemStore::default();
    let seeded = store.seed_product("X1", "Widget");

    let update = UpdateProductUseCase {
        products: store.products(),
    };
    let returned = update
        .execute(
            &seeded.id.to_string(),
            input("X2", "Renamed", Decimal::new(1, 0)),
        )
        .await
        .unwrap();

    let stored = store.stored_product(seeded.id).unwrap();
    assert_eq!(stored.name, "Widget");
    assert_eq!(stored.sku.as_deref(), Some("X1"));
    assert_eq!(stored.price, seeded.price);
    assert_eq!(returned.name, "Widget");
    assert!(stored.updated_at >= seeded.updated_at);
}

#[tokio::test]
async fn should_validate_update_fields() {
    let store = MemStore::default();
    let seeded = store.seed_product("X1", "Widget");

    let update = UpdateProductUseCase {
        products: store.products(),
    };
    let err = update
        .execute(&seeded.id.to_string(), input("X1", "", Decimal::ONE))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Name is required");
}

// ── DeleteProductUseCase ─────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_product_and_report_missing_afterwards() {
    let store = MemStore::default();
    let seeded = store.seed_product("X1", "Widget");
    let delete = DeleteProductUseCase {
        products: store.products(),
    };

    delete.execute(&seeded.id.to_string()).await.unwrap();
    assert!(store.stored_product(seeded.id).is_none());

    let again = delete.execute(&seeded.id.to_string()).await;
    assert!(matches!(again, Err(CatalogServiceError::ProductNotFound)));
}
