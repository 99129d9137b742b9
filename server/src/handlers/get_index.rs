use crate::handlers::prelude::*;

#[derive(Serialize)]
struct GamesPageData {
    games: Vec<GameData>,
}

#[get("/")]
pub async fn get_index(req: HttpRequest) -> HttpResult {
    let state = server_state(&req)?;
    let games = db::prelude::Games::find()
        .order_by_asc(db::games::Column::Id)
        .all(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to select games from db: {e}");
            AppHttpError::Internal
        })?;
    let games = games
        .into_iter()
        .map(|g| game_data(&state.config.site_base_url_path, g))
        .collect();
    Ok(HttpResponse::Ok().json(GamesPageData { games }))
}
