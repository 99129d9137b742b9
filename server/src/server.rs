use actix_web::{App, HttpServer};
use sea_orm::Database;
use sea_orm_migration::MigratorTrait;

use crate::config::Config;
use crate::handlers;
use crate::server_state::ServerState;

pub struct Handle {
    pub server: actix_web::dev::Server,
    pub addrs: Vec<std::net::SocketAddr>,
}

pub async fn run(config: Config) -> anyhow::Result<()> {
    let handle = create(config).await?;
    handle.server.await?;
    Ok(())
}

pub async fn create(config: Config) -> anyhow::Result<Handle> {
    let mut db_options = sea_orm::ConnectOptions::new(&config.db_path);
    db_options.max_connections(32);
    let db = Database::connect(db_options).await?;
    // Creates and seeds the store on first startup; a no-op afterwards.
    migration::Migrator::up(&db, None).await?;
    let port = config.server_config.port;
    let app_state = ServerState {
        db,
        config: config.server_config,
    };
    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .service(handlers::get_index::get_index)
            .service(handlers::get_new_game::get_new_game)
            .service(handlers::post_new_game::post_new_game)
            .service(handlers::get_game::get_game)
            .service(handlers::post_add_match::post_add_match)
    })
    .workers(8)
    .bind(("::", port))?;
    let addrs = server.addrs();
    let server = server.run(); // Does not actually run the server but creates a future.
    Ok(Handle { server, addrs })
}
