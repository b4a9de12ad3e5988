use std::{process, sync::Arc};

use hellohub::{
    application::{cache::KvCache, data_files::DataFileService, error::AppError},
    config::{self, CacheBackend},
    infra::{
        cache::{MemoryCache, RedisCache},
        db::SqliteRepositories,
        error::InfraError,
        http::{self, ApiState, FilesState},
        telemetry,
    },
};
use tokio::try_join;
use tracing::{Dispatch, Level, dispatcher, error, info, warn};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt().with_max_level(Level::ERROR).finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(AppError::from)?;

    let command = cli_args
        .command
        .unwrap_or(config::Command::Serve(Box::<config::ServeArgs>::default()));

    telemetry::init(&settings.logging).map_err(AppError::from)?;

    match command {
        config::Command::Serve(_) => run_serve(settings).await,
        config::Command::Migrate(_) => run_migrate(settings).await,
    }
}

async fn run_serve(settings: config::Settings) -> Result<(), AppError> {
    if settings.security.secret_key.is_default() && !settings.security.debug {
        warn!(
            target = "hellohub::startup",
            "SECRET_KEY is unset; using the development default"
        );
    }

    let repositories = init_repositories(&settings).await?;
    let cache = init_cache(&settings.cache.backend).await?;

    let api_state = ApiState::new(repositories, cache, settings.cache.hello_ttl);
    let files_state = FilesState {
        files: Arc::new(DataFileService::new(settings.files.directory.clone())),
    };

    serve_http(&settings, api_state, files_state).await
}

async fn run_migrate(settings: config::Settings) -> Result<(), AppError> {
    init_repositories(&settings).await?;
    info!(
        target = "hellohub::migrate",
        database = %settings.database.url,
        "migrations applied"
    );
    Ok(())
}

async fn init_repositories(
    settings: &config::Settings,
) -> Result<Arc<SqliteRepositories>, AppError> {
    let pool = SqliteRepositories::connect(
        &settings.database.url,
        settings.database.max_connections.get(),
    )
    .await
    .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    SqliteRepositories::run_migrations(&pool)
        .await
        .map_err(|err| AppError::from(InfraError::database(err.to_string())))?;

    Ok(Arc::new(SqliteRepositories::new(pool)))
}

async fn init_cache(backend: &CacheBackend) -> Result<Arc<dyn KvCache>, AppError> {
    match backend {
        CacheBackend::Redis { url } => {
            let cache = RedisCache::connect(url).await.map_err(AppError::from)?;
            Ok(Arc::new(cache))
        }
        CacheBackend::Memory => {
            info!(target = "hellohub::cache", "using in-process cache");
            Ok(Arc::new(MemoryCache::new()))
        }
    }
}

async fn serve_http(
    settings: &config::Settings,
    api_state: ApiState,
    files_state: FilesState,
) -> Result<(), AppError> {
    let public_router = http::build_router(api_state);
    let files_router = http::build_files_router(files_state);

    let public_listener = tokio::net::TcpListener::bind(settings.server.public_addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;
    let files_listener = tokio::net::TcpListener::bind(settings.server.files_addr)
        .await
        .map_err(|err| AppError::from(InfraError::from(err)))?;

    info!(
        target = "hellohub::startup",
        public_addr = %settings.server.public_addr,
        files_addr = %settings.server.files_addr,
        "listening"
    );

    let public_server = axum::serve(public_listener, public_router.into_make_service());
    let files_server = axum::serve(files_listener, files_router.into_make_service());

    try_join!(public_server, files_server)
        .map_err(|err| AppError::unexpected(format!("server error: {err}")))?;

    Ok(())
}
