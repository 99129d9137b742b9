use crate::handlers::prelude::*;

#[derive(Serialize)]
struct GamePageData {
    game: GameData,
    matches: Vec<MatchData>,
}

#[get("/gioco/{game_id}")]
pub async fn get_game(req: HttpRequest, path: web::Path<i64>) -> HttpResult {
    let game_id = *path;
    let state = server_state(&req)?;
    let Some(game) = db::games::Entity::find_by_id(game_id)
        .one(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch game {game_id} from db: {e:?}");
            AppHttpError::Internal
        })?
    else {
        return Err(AppHttpError::NotFound);
    };
    let matches = db_matches_of_game(&state.db, game_id).await.map_err(|e| {
        log::error!("Failed to fetch matches for game {game_id}: {e:?}");
        AppHttpError::Internal
    })?;
    Ok(HttpResponse::Ok().json(GamePageData {
        game: game_data(&state.config.site_base_url_path, game),
        matches: matches.into_iter().map(match_data).collect(),
    }))
}
