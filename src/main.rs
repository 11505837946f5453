use actix_web::{App, HttpServer, middleware::Logger};

use crate::{configs::AppConfig, modules::upload::service::UploadStore};

mod api;
mod configs;
mod modules;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();
    let store = UploadStore::new(config.upload_dir.clone());

    log::info!(
        "Starting server at http://{}:{} (uploads: {}, bundle: {})",
        config.host,
        config.port,
        config.upload_dir.display(),
        config.static_dir.display()
    );

    let bind = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(modules::statics::route::configure(config.clone()))
            .configure(modules::upload::route::configure(store.clone()))
    })
    .bind(bind)?
    .workers(2)
    .run()
    .await
}
