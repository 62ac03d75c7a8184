use std::{net::TcpListener, time::Duration};

use ecotrace::{
    configuration::{get_configuration, SnapshotBackend},
    routes::auth::AdminToken,
    services::{OpenaiClient, SnapshotStore},
    startup::run,
};
use env_logger::Env;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");

    let pool_options = PgPoolOptions::new()
        .max_connections(20)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(15 * 60)) // 15 minutes
        .max_lifetime(None);

    let connection_pool = pool_options.connect_lazy_with(configuration.database.with_db());

    if let Err(e) = sqlx::migrate!("./migrations").run(&connection_pool).await {
        log::error!("Failed to run migrations: {:?}", e);
    }

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    log::info!("Listening on {}", address);

    let openai_client = OpenaiClient::new(
        configuration.api_keys.openai,
        configuration.application.openai_model,
    );
    let snapshots = match configuration.application.snapshot_backend {
        SnapshotBackend::Postgres => SnapshotStore::Postgres(connection_pool.clone()),
        SnapshotBackend::Memory => SnapshotStore::memory(),
    };
    let admin_token = AdminToken(configuration.api_keys.admin_token);

    run(
        listener,
        connection_pool,
        openai_client,
        snapshots,
        admin_token,
    )?
    .await
}
