/// Playhouse Server - tattoo studio marketing and booking backend
use clap::{Parser, Subcommand};
use playhouse_core::types::{CreateArtist, CreatePortfolioItem, CreateUser, Role};
use playhouse_core::StorageContext;
use playhouse_server::{
    config::ServerConfig,
    router::create_router,
    services::{AuthService, ChatClient, ImageStore},
    state::AppState,
};
use playhouse_storage::SqliteStorage;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "playhouse-server")]
#[command(about = "Playhouse tattoo studio backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Role (admin or artist)
        #[arg(short, long, default_value = "artist")]
        role: Role,
    },
    /// List all users
    ListUsers,
    /// Seed the database with the studio's demo artists
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "playhouse_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::AddUser {
            username,
            password,
            role,
        } => {
            add_user(&username, &password, role).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
        Commands::Seed => {
            seed().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Playhouse Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let storage = open_storage(&config).await?;
    tracing::info!("Database connected");

    // Initialize image storage
    let images = ImageStore::new(config.storage.uploads_dir.clone());
    images.initialize().await?;
    let images = Arc::new(images);
    tracing::info!("Uploads directory ready at {:?}", config.storage.uploads_dir);

    // Initialize auth service
    let auth = Arc::new(AuthService::new(
        config.auth.session_secret.clone(),
        config.auth.session_ttl_hours,
        config.auth.cookie_secure,
    ));

    // Initialize chat client
    let chat = Arc::new(ChatClient::new(config.chat.clone())?);
    if config.chat.api_key.as_deref().unwrap_or_default().is_empty() {
        tracing::warn!("Chat API key not configured; /api/chat will return fallback replies");
    }

    bootstrap_admin(storage.as_ref(), &auth, &config).await?;

    // Drop sessions that expired while the server was down
    let swept = storage.delete_expired_sessions().await?;
    if swept > 0 {
        tracing::info!("Removed {} expired sessions", swept);
    }

    // Build application state and router
    let app_state = AppState::new(storage, auth, images, chat);
    let app = create_router(
        app_state,
        config.storage.uploads_dir.clone(),
        config.storage.web_dir.clone(),
    );

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Open the SQLite database, run migrations, and wrap it in the storage trait
async fn open_storage(config: &ServerConfig) -> anyhow::Result<Arc<dyn StorageContext>> {
    let pool = playhouse_storage::create_pool(&config.storage.database_url).await?;
    playhouse_storage::run_migrations(&pool).await?;
    Ok(Arc::new(SqliteStorage::new(pool)))
}

/// Create the first admin account when the user table is empty
async fn bootstrap_admin(
    storage: &dyn StorageContext,
    auth: &AuthService,
    config: &ServerConfig,
) -> anyhow::Result<()> {
    if !storage.list_users().await?.is_empty() {
        return Ok(());
    }

    let Some(password) = config
        .auth
        .bootstrap_admin_password
        .as_deref()
        .filter(|p| !p.is_empty())
    else {
        tracing::warn!(
            "No users exist and no bootstrap admin password configured; admin API unusable"
        );
        return Ok(());
    };

    let user = storage
        .create_user(CreateUser {
            username: "admin".to_string(),
            role: Role::Admin,
        })
        .await?;
    let password_hash = auth.hash_password(password)?;
    storage.set_password_hash(user.id, &password_hash).await?;

    tracing::info!("Created bootstrap admin user");
    Ok(())
}

async fn add_user(username: &str, password: &str, role: Role) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let storage = open_storage(&config).await?;

    let auth = AuthService::new(
        config.auth.session_secret.clone(),
        config.auth.session_ttl_hours,
        config.auth.cookie_secure,
    );

    let user = storage
        .create_user(CreateUser {
            username: username.to_string(),
            role,
        })
        .await?;
    let password_hash = auth.hash_password(password)?;
    storage.set_password_hash(user.id, &password_hash).await?;

    println!("Created user {} ({})", user.username, user.role);
    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let storage = open_storage(&config).await?;

    let users = storage.list_users().await?;

    println!("Users:");
    for user in users {
        println!("  {} - {} ({})", user.id, user.username, user.role);
    }

    Ok(())
}

/// Insert the studio's demo artists and portfolios into an empty database
async fn seed() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let storage = open_storage(&config).await?;

    if !storage.list_artists().await?.is_empty() {
        println!("Artists already exist, skipping seed");
        return Ok(());
    }

    for (artist, portfolio) in demo_artists() {
        let name = artist.name.clone();
        let created = storage.create_artist(artist).await?;
        for image_url in portfolio {
            storage
                .add_portfolio_item(CreatePortfolioItem {
                    artist_id: created.id,
                    image_url: image_url.to_string(),
                    title: None,
                    description: None,
                })
                .await?;
        }
        println!("Seeded artist {}", name);
    }

    Ok(())
}

fn demo_artists() -> Vec<(CreateArtist, Vec<&'static str>)> {
    vec![
        (
            CreateArtist {
                name: "Mila".to_string(),
                slug: "mila".to_string(),
                bio: "Specializing in fine line work and delicate botanicals".to_string(),
                specialties: vec![
                    "Fine Line".to_string(),
                    "Botanicals".to_string(),
                    "Minimalist".to_string(),
                ],
                profile_image: None,
                instagram: None,
                experience: None,
                style: None,
            },
            vec![
                "https://images.unsplash.com/photo-1542717309-4256ee08c549",
                "https://images.unsplash.com/photo-1542717309-4256ee08c550",
                "https://images.unsplash.com/photo-1542717309-4256ee08c551",
            ],
        ),
        (
            CreateArtist {
                name: "Yi".to_string(),
                slug: "yi".to_string(),
                bio: "Master of traditional Asian art and contemporary fusion".to_string(),
                specialties: vec![
                    "Traditional Asian".to_string(),
                    "Contemporary".to_string(),
                    "Color Work".to_string(),
                ],
                profile_image: None,
                instagram: None,
                experience: None,
                style: None,
            },
            vec![
                "https://images.unsplash.com/photo-1542717309-4256ee08c552",
                "https://images.unsplash.com/photo-1542717309-4256ee08c553",
                "https://images.unsplash.com/photo-1542717309-4256ee08c554",
            ],
        ),
    ]
}
