use actix_files::NamedFile;
use actix_web::web;

use crate::api::error;
use crate::configs::AppConfig;

/// Serve the bundle's entry document. Query parameters are ignored; the root
/// path always maps to `index.html`.
pub async fn index(config: web::Data<AppConfig>) -> Result<NamedFile, error::Error> {
    NamedFile::open(config.static_dir.join("index.html")).map_err(|_| error::Error::NotFound)
}
