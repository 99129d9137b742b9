use sea_orm::Set;

use crate::handlers::prelude::*;
use crate::validation::*;

#[derive(Deserialize, Debug)]
pub struct AddMatchForm {
    date: String,
    winner: String,
    winner_score: String,
}

#[post("/gioco/{game_id}/aggiungi_partita")]
pub async fn post_add_match(
    req: HttpRequest,
    path: web::Path<i64>,
    web::Form(form): web::Form<AddMatchForm>,
) -> Result<HttpResponse<()>, AppHttpError> {
    let game_id = *path;
    let state = server_state(&req)?;
    let date = parse_date(&form.date).map_err(AppHttpError::InvalidMatchField)?;
    validate_winner(&form.winner).map_err(AppHttpError::InvalidMatchField)?;
    let winner_score = parse_score(&form.winner_score).map_err(AppHttpError::InvalidMatchField)?;
    // A match must reference an existing game.
    let game = db::games::Entity::find_by_id(game_id)
        .one(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to fetch game {game_id} from db: {e:?}");
            AppHttpError::Internal
        })?;
    if game.is_none() {
        return Err(AppHttpError::NotFound);
    }
    let row = db::matches::ActiveModel {
        game_id: Set(game_id),
        date: Set(date),
        winner: Set(form.winner),
        winner_score: Set(winner_score),
        ..Default::default()
    };
    db::matches::Entity::insert(row)
        .exec(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to insert match for game {game_id}: {e}");
            AppHttpError::Internal
        })?;
    Ok(web::Redirect::to(format!(
        "{}/gioco/{game_id}",
        state.config.site_base_url_path
    ))
    .see_other()
    .respond_to(&req))
}
