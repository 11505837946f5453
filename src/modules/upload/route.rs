use actix_web::web;

use crate::modules::upload::service::UploadStore;

pub fn configure(store: UploadStore) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(store)).service(
            web::resource("/upload")
                .route(web::post().to(crate::modules::upload::handle::upload_file)),
        );
    }
}
