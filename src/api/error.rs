use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
};

/// Request-boundary errors, each mapped to a distinct status code so a client
/// can tell a bad request from a server fault. Bodies stay plain text.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("multipart field `file` missing")]
    MissingField,
    #[error("request body is not valid multipart/form-data")]
    Unsupported,
    #[error("not found")]
    NotFound,
    #[error("failed to persist upload")]
    WriteFailure(#[from] std::io::Error),
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingField => StatusCode::BAD_REQUEST,
            Error::Unsupported => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::WriteFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let Error::WriteFailure(source) = self {
            // The client only ever sees the generic message.
            log::error!("upload write failed: {source}");
        }
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
