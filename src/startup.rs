use std::net::TcpListener;

use actix_files::Files;
use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use sqlx::PgPool;

use crate::{
    routes::{
        admin_route, auth::AdminToken, dashboard_route, default_route, profile_route,
        resource_route,
    },
    services::{OpenaiClient, SnapshotStore},
};

pub fn run(
    listener: TcpListener,
    db_pool: PgPool,
    openai_client: OpenaiClient,
    snapshots: SnapshotStore,
    admin_token: AdminToken,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    let openai_client = web::Data::new(openai_client);
    let snapshots = web::Data::new(snapshots);
    let admin_token = web::Data::new(admin_token);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(Files::new("/static", "./templates/static").prefer_utf8(true))
            .service(default_route::default)
            .service(
                web::scope("/api")
                    .service(resource_route::add_resource)
                    .service(resource_route::get_resources)
                    .service(resource_route::get_resource_details)
                    .service(profile_route::submit_quiz)
                    .service(profile_route::save_recommendations)
                    .service(profile_route::dashboard),
            )
            .service(
                web::scope("/app")
                    .service(dashboard_route::dashboard)
                    .service(admin_route::admin),
            )
            .app_data(db_pool.clone())
            .app_data(openai_client.clone())
            .app_data(snapshots.clone())
            .app_data(admin_token.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
