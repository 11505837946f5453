use actix_files::Files;
use actix_web::web;

use crate::configs::AppConfig;

pub fn configure(config: AppConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let static_dir = config.static_dir.clone();
        cfg.app_data(web::Data::new(config))
            .route("/", web::get().to(crate::modules::statics::handle::index))
            .service(Files::new("/builder", static_dir));
    }
}
