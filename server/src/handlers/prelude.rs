pub use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};
pub use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
pub use serde::{Deserialize, Serialize};

pub use ludoteca_db as db;

pub use crate::handlers::page_data::*;
pub use crate::http_types::*;
pub use crate::server_state::*;
