use actix_multipart::Multipart;
use actix_web::{HttpResponse, http::header::ContentType, web};
use futures_util::TryStreamExt;

use crate::api::error;
use crate::modules::upload::service::UploadStore;

/// Accept a single file via the multipart field named `file` and persist it.
/// The client-supplied filename is discarded; storage names come from the
/// handling instant.
pub async fn upload_file(
    mut payload: Multipart,
    store: web::Data<UploadStore>,
) -> Result<HttpResponse, error::Error> {
    while let Some(mut field) =
        payload.try_next().await.map_err(|_| error::Error::Unsupported)?
    {
        if field.name() != Some("file") {
            // Drain unrelated fields so the stream can advance.
            while field
                .try_next()
                .await
                .map_err(|_| error::Error::Unsupported)?
                .is_some()
            {}
            continue;
        }

        if let Some(filename) =
            field.content_disposition().and_then(|cd| cd.get_filename())
        {
            log::debug!("received upload `{filename}`");
        }

        let mut bytes = Vec::new();
        while let Some(chunk) =
            field.try_next().await.map_err(|_| error::Error::Unsupported)?
        {
            bytes.extend_from_slice(&chunk);
        }

        let name = store.store(&bytes).await?;
        log::info!("stored {} byte upload as {name}", bytes.len());

        return Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body("OK"));
    }

    Err(error::Error::MissingField)
}
