use shelf_catalog::error::CatalogServiceError;
use shelf_catalog::usecase::auth::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use shelf_catalog::usecase::user::GetUserUseCase;

use crate::helpers::{DEFAULT_AVATAR, MemStore, MemUsers, StubImageSource, credentials};

fn register_usecase(
    store: &MemStore,
    images: StubImageSource,
) -> RegisterUseCase<MemUsers, StubImageSource> {
    RegisterUseCase {
        users: store.users(),
        images,
        credentials: credentials(),
        default_avatar_url: DEFAULT_AVATAR.to_owned(),
    }
}

fn register_input(email: &str, password: &str, avatar: Option<&str>) -> RegisterInput {
    RegisterInput {
        name: Some("Ann".to_owned()),
        email: email.to_owned(),
        password: password.to_owned(),
        avatar_url: avatar.map(str::to_owned),
    }
}

// ── RegisterUseCase ──────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_only_hashed_password() {
    let store = MemStore::default();
    let usecase = register_usecase(&store, StubImageSource::default());

    usecase
        .execute(register_input("ann@example.com", "hunter2", None))
        .await
        .unwrap();

    let stored = store.stored_user("ann@example.com").unwrap();
    assert_ne!(stored.password_hash, "hunter2");
    assert!(stored.password_hash.starts_with("$argon2"));
    assert_eq!(stored.role, "user");
}

#[tokio::test]
async fn should_fetch_default_avatar_when_none_supplied() {
    let store = MemStore::default();
    let images = StubImageSource::default();
    let usecase = register_usecase(&store, images.clone());

    usecase
        .execute(register_input("ann@example.com", "pw", None))
        .await
        .unwrap();

    assert_eq!(images.requested(), vec![DEFAULT_AVATAR.to_owned()]);
    let stored = store.stored_user("ann@example.com").unwrap();
    assert!(stored.avatar.unwrap().starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn should_fetch_supplied_avatar() {
    let store = MemStore::default();
    let images = StubImageSource::default();
    let usecase = register_usecase(&store, images.clone());

    usecase
        .execute(register_input(
            "ann@example.com",
            "pw",
            Some("https://img.example/ann.jpg"),
        ))
        .await
        .unwrap();

    assert_eq!(images.requested(), vec!["https://img.example/ann.jpg".to_owned()]);
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let store = MemStore::default();
    let usecase = register_usecase(&store, StubImageSource::default());

    usecase
        .execute(register_input("ann@example.com", "pw", None))
        .await
        .unwrap();
    let result = usecase
        .execute(register_input("ann@example.com", "other", None))
        .await;

    assert!(
        matches!(result, Err(CatalogServiceError::Conflict(_))),
        "expected Conflict, got {result:?}"
    );
}

#[tokio::test]
async fn should_not_create_account_when_avatar_fetch_fails() {
    let store = MemStore::default();
    let usecase = register_usecase(&store, StubImageSource::failing());

    let result = usecase
        .execute(register_input("ann@example.com", "pw", None))
        .await;

    assert!(matches!(result, Err(CatalogServiceError::ImageFetch(_))));
    assert!(store.stored_user("ann@example.com").is_none());
}

#[tokio::test]
async fn should_require_password_before_fetching_avatar() {
    let store = MemStore::default();
    let images = StubImageSource::default();
    let usecase = register_usecase(&store, images.clone());

    let result = usecase
        .execute(register_input("ann@example.com", "", None))
        .await;

    assert!(matches!(result, Err(CatalogServiceError::Validation(_))));
    assert!(images.requested().is_empty());
}

// ── LoginUseCase ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_issue_token_that_decodes_to_same_identity() {
    let store = MemStore::default();
    register_usecase(&store, StubImageSource::default())
        .execute(register_input("ann@example.com", "hunter2", None))
        .await
        .unwrap();

    let login = LoginUseCase {
        users: store.users(),
        credentials: credentials(),
    };
    let output = login
        .execute(LoginInput {
            email: "ann@example.com".to_owned(),
            password: "hunter2".to_owned(),
        })
        .await
        .unwrap();

    let claims = credentials().validate_token(&output.token).unwrap();
    assert_eq!(claims.user_id, output.user_id);
    assert_eq!(claims.email, "ann@example.com");
}

#[tokio::test]
async fn should_reject_wrong_password() {
    let store = MemStore::default();
    register_usecase(&store, StubImageSource::default())
        .execute(register_input("ann@example.com", "hunter2", None))
        .await
        .unwrap();

    let login = LoginUseCase {
        users: store.users(),
        credentials: credentials(),
    };
    let result = login
        .execute(LoginInput {
            email: "ann@example.com".to_owned(),
            password: "hunter3".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(CatalogServiceError::IncorrectPassword)));
}

#[tokio::test]
async fn should_report_unknown_email_as_account_not_found() {
    let login = LoginUseCase {
        users: MemStore::default().users(),
        credentials: credentials(),
    };
    let result = login
        .execute(LoginInput {
            email: "ghost@example.com".to_owned(),
            password: "pw".to_owned(),
        })
        .await;

    assert!(matches!(result, Err(CatalogServiceError::AccountNotFound)));
}

// ── GetUserUseCase ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_find_registered_user_by_id() {
    let store = MemStore::default();
    let seeded = store.seed_user("bob@example.com");

    let usecase = GetUserUseCase {
        repo: store.users(),
    };
    let user = usecase.execute(&seeded.id.to_string()).await.unwrap();
    assert_eq!(user.email, "bob@example.com");
}
