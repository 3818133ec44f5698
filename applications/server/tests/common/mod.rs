/// Common test utilities and fixtures
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use playhouse_core::types::{Artist, CreateArtist, CreateUser, Role, User};
use playhouse_core::StorageContext;
use playhouse_server::config::ChatSettings;
use playhouse_server::{create_router, AppState, AuthService, ChatClient, ImageStore};
use playhouse_storage::SqliteStorage;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_SESSION_SECRET: &str = "test-session-secret";
pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "AdminPassword456!";
pub const ARTIST_USERNAME: &str = "mila";
pub const ARTIST_PASSWORD: &str = "ArtistPassword123!";

/// PNG signature followed by filler bytes
pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-a-real-image-but-sniffs-as-one";

/// A fully wired application over a throwaway database and uploads directory
pub struct TestApp {
    pub app: Router,
    pub storage: Arc<dyn StorageContext>,
    pub auth: Arc<AuthService>,
    pub uploads_dir: PathBuf,
    _temp_dir: TempDir,
}

pub async fn create_test_app() -> TestApp {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("playhouse-test.db");
    let database_url = format!("sqlite://{}", db_path.display());

    let pool = playhouse_storage::create_pool(&database_url)
        .await
        .expect("Failed to create pool");
    playhouse_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    let storage: Arc<dyn StorageContext> = Arc::new(SqliteStorage::new(pool));

    let uploads_dir = temp_dir.path().join("uploads");
    let images = ImageStore::new(uploads_dir.clone());
    images
        .initialize()
        .await
        .expect("Failed to create uploads dir");

    let auth = Arc::new(AuthService::new(TEST_SESSION_SECRET.to_string(), 1, false));

    // No API key configured, so chat always takes the fallback path
    let chat = ChatClient::new(ChatSettings {
        api_key: None,
        api_base: "http://127.0.0.1:9".to_string(),
        model: "gpt-4o".to_string(),
        max_tokens: 150,
    })
    .expect("Failed to build chat client");

    let state = AppState::new(
        Arc::clone(&storage),
        Arc::clone(&auth),
        Arc::new(images),
        Arc::new(chat),
    );
    let app = create_router(state, uploads_dir.clone(), temp_dir.path().join("web"));

    TestApp {
        app,
        storage,
        auth,
        uploads_dir,
        _temp_dir: temp_dir,
    }
}

/// Create an admin account with the fixture credentials
pub async fn create_admin(test_app: &TestApp) -> User {
    create_account(test_app, ADMIN_USERNAME, ADMIN_PASSWORD, Role::Admin).await
}

/// Create a non-admin artist account with the fixture credentials
pub async fn create_artist_account(test_app: &TestApp) -> User {
    create_account(test_app, ARTIST_USERNAME, ARTIST_PASSWORD, Role::Artist).await
}

async fn create_account(test_app: &TestApp, username: &str, password: &str, role: Role) -> User {
    let user = test_app
        .storage
        .create_user(CreateUser {
            username: username.to_string(),
            role,
        })
        .await
        .expect("Failed to create user");
    let hash = test_app
        .auth
        .hash_password(password)
        .expect("Failed to hash password");
    test_app
        .storage
        .set_password_hash(user.id, &hash)
        .await
        .expect("Failed to store password hash");
    user
}

/// Insert an artist through the storage trait
pub async fn seed_artist(test_app: &TestApp, name: &str, slug: &str) -> Artist {
    test_app
        .storage
        .create_artist(CreateArtist {
            name: name.to_string(),
            slug: slug.to_string(),
            bio: format!("{name} does great work"),
            specialties: vec!["Fine Line".to_string(), "Blackwork".to_string()],
            profile_image: None,
            instagram: None,
            experience: None,
            style: None,
        })
        .await
        .expect("Failed to create artist")
}

/// Log in through the API and return the session cookie pair
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let body = serde_json::json!({ "username": username, "password": password });
    let request = Request::builder()
        .uri("/api/login")
        .method("POST")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Login response should set the session cookie")
        .to_str()
        .unwrap();
    set_cookie
        .split(';')
        .next()
        .expect("Cookie should have a name=value pair")
        .to_string()
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Build a multipart/form-data body from file and text fields
///
/// Returns the Content-Type header value and the encoded body.
pub fn multipart_body(files: &[(&str, &[u8])], texts: &[(&str, &str)]) -> (String, Vec<u8>) {
    let boundary = "playhouse-test-boundary";
    let mut body = Vec::new();

    for (name, data) in files {
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"upload.bin\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }

    for (name, value) in texts {
        body.extend_from_slice(
            format!("--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }

    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    (
        format!("multipart/form-data; boundary={boundary}"),
        body,
    )
}
