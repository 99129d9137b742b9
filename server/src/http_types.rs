use actix_web::http::{header::ContentType, StatusCode};
use actix_web::HttpResponse;
use derive_more::Display;

pub type HttpResult = Result<HttpResponse, AppHttpError>;

#[derive(Debug, Display)]
pub enum AppHttpError {
    #[display(fmt = "Internal error.")]
    Internal,

    #[display(fmt = "Bad request.")]
    BadClientData,

    #[display(fmt = "Not found.")]
    NotFound,

    #[display(fmt = "Invalid game field: {_0}")]
    InvalidGameField(String),

    #[display(fmt = "Invalid match field: {_0}")]
    InvalidMatchField(String),
}

impl std::error::Error for AppHttpError {}

impl actix_web::error::ResponseError for AppHttpError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .body(self.to_string())
    }

    fn status_code(&self) -> StatusCode {
        match *self {
            AppHttpError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppHttpError::BadClientData => StatusCode::BAD_REQUEST,
            AppHttpError::NotFound => StatusCode::NOT_FOUND,
            AppHttpError::InvalidGameField(_) => StatusCode::BAD_REQUEST,
            AppHttpError::InvalidMatchField(_) => StatusCode::BAD_REQUEST,
        }
    }
}
