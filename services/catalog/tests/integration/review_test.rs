use uuid::Uuid;

use shelf_catalog::domain::types::Patch;
use shelf_catalog::error::CatalogServiceError;
use shelf_catalog::usecase::review::{
    CreateReviewInput, CreateReviewUseCase, DeleteReviewUseCase, ListAllReviewsUseCase,
    ListReviewsForProductUseCase, UpdateReviewInput, UpdateReviewUseCase,
};

use crate::helpers::MemStore;

fn review_input(product_id: Uuid, user_id: Uuid, rating: i32) -> CreateReviewInput {
    CreateReviewInput {
        product_id: product_id.to_string(),
        user_id: user_id.to_string(),
        title: Some("Verdict".to_owned()),
        body: "Does the job".to_owned(),
        rating,
    }
}

// ── CreateReviewUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_accept_exactly_ratings_one_through_five_on_create() {
    let store = MemStore::default();
    let product = store.seed_product("X1", "Widget");
    let user = store.seed_user("ann@example.com");
    let create = CreateReviewUseCase {
        reviews: store.reviews(),
    };

    for rating in -1..=7 {
        let result = create.execute(review_input(product.id, user.id, rating)).await;
        if (1..=5).contains(&rating) {
            assert!(result.is_ok(), "rating {rating} should be accepted");
        } else {
            assert!(
                matches!(result, Err(CatalogServiceError::Validation(_))),
                "rating {rating} should be rejected"
            );
        }
    }
    assert_eq!(store.review_count(), 5);
}

// ── UpdateReviewUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_accept_exactly_ratings_one_through_five_on_update() {
    let store = MemStore::default();
    let product = store.seed_product("X1", "Widget");
    let user = store.seed_user("ann@example.com");
    let review = CreateReviewUseCase {
        reviews: store.reviews(),
    }
    .execute(review_input(product.id, user.id, 3))
    .await
    .unwrap();
    let update = UpdateReviewUseCase {
        reviews: store.reviews(),
    };

    for rating in -1..=7 {
        let result = update
            .execute(
                &review.id.to_string(),
                UpdateReviewInput {
                    rating: Patch::Present(rating),
                    ..Default::default()
                },
            )
            .await;
        assert_eq!(result.is_ok(), (1..=5).contains(&rating), "rating {rating}");
    }
}

#[tokio::test]
async fn should_persist_partial_update() {
    let store = MemStore::default();
    let product = store.seed_product("X1", "Widget");
    let user = store.seed_user("ann@example.com");
    let review = CreateReviewUseCase {
        reviews: store.reviews(),
    }
    .execute(review_input(product.id, user.id, 3))
    .await
    .unwrap();

    UpdateReviewUseCase {
        reviews: store.reviews(),
    }
    .execute(
        &review.id.to_string(),
        UpdateReviewInput {
            body: Patch::Present("Changed my mind".to_owned()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let listed = ListAllReviewsUseCase {
        reviews: store.reviews(),
    }
    .execute()
    .await
    .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].review.body, "Changed my mind");
    assert_eq!(listed[0].review.rating, 3);
    assert_eq!(listed[0].review.title.as_deref(), Some("Verdict"));
}

#[tokio::test]
async fn should_report_unknown_review_on_update() {
    let update = UpdateReviewUseCase {
        reviews: MemStore::default().reviews(),
    };
    let result = update
        .execute(&Uuid::now_v7().to_string(), UpdateReviewInput::default())
        .await;
    assert!(matches!(result, Err(CatalogServiceError::ReviewNotFound)));
}

// ── ListReviewsForProductUseCase ─────────────────────────────────────────────

#[tokio::test]
async fn should_list_product_reviews_with_authors() {
    let store = MemStore::default();
    let product = store.seed_product("X1", "Widget");
    let other = store.seed_product("X2", "Gadget");
    let user = store.seed_user("ann@example.com");
    let create = CreateReviewUseCase {
        reviews: store.reviews(),
    };
    create.execute(review_input(product.id, user.id, 4)).await.unwrap();
    create.execute(review_input(other.id, user.id, 2)).await.unwrap();

    let found = ListReviewsForProductUseCase {
        products: store.products(),
        reviews: store.reviews(),
    }
    .execute(&product.id.to_string())
    .await
    .unwrap();

    assert_eq!(found.product.name, "Widget");
    assert_eq!(found.reviews.len(), 1);
    let author = found.reviews[0].author.as_ref().unwrap();
    assert_eq!(author.email, "ann@example.com");
}

#[tokio::test]
async fn should_leave_author_empty_when_account_is_missing() {
    let store = MemStore::default();
    let product = store.seed_product("X1", "Widget");
    CreateReviewUseCase {
        reviews: store.reviews(),
    }
    .execute(review_input(product.id, Uuid::now_v7(), 5))
    .await
    .unwrap();

    let listed = ListAllReviewsUseCase {
        reviews: store.reviews(),
    }
    .execute()
    .await
    .unwrap();
    assert!(listed[0].author.is_none());
}

#[tokio::test]
async fn should_report_missing_product_when_listing_reviews() {
    let list = ListReviewsForProductUseCase {
        products: MemStore::default().products(),
        reviews: MemStore::default().reviews(),
    };
    let result = list.execute(&Uuid::now_v7().to_string()).await;
    assert!(matches!(result, Err(CatalogServiceError::ProductNotFound)));
}

// ── DeleteReviewUseCase ──────────────────────────────────────────────────────

#[tokio::test]
async fn should_hard_delete_review() {
    let store = MemStore::default();
    let product = store.seed_product("X1", "Widget");
    let user = store.seed_user("ann@example.com");
    let review = CreateReviewUseCase {
        reviews: store.reviews(),
    }
    .execute(review_input(product.id, user.id, 4))
    .await
    .unwrap();

    DeleteReviewUseCase {
        reviews: store.reviews(),
    }
    .execute(&review.id.to_string())
    .await
    .unwrap();

    assert_eq!(store.review_count(), 0);
}
