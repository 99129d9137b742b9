use sea_orm::Set;

use crate::handlers::prelude::*;
use crate::validation::*;

// All fields arrive as text; typed values are produced here, not by the store.
#[derive(Deserialize, Debug)]
pub struct NewGameForm {
    name: String,
    max_players: String,
    average_duration: String,
    category: String,
}

#[post("/nuovo_gioco")]
pub async fn post_new_game(
    req: HttpRequest,
    web::Form(form): web::Form<NewGameForm>,
) -> Result<HttpResponse<()>, AppHttpError> {
    let state = server_state(&req)?;
    validate_game_name(&form.name).map_err(AppHttpError::InvalidGameField)?;
    validate_category(&form.category).map_err(AppHttpError::InvalidGameField)?;
    let max_players =
        parse_positive("max_players", &form.max_players).map_err(AppHttpError::InvalidGameField)?;
    let average_duration = parse_positive("average_duration", &form.average_duration)
        .map_err(AppHttpError::InvalidGameField)?;
    let game = db::games::ActiveModel {
        name: Set(form.name),
        max_players: Set(max_players),
        average_duration: Set(average_duration),
        category: Set(form.category),
        ..Default::default()
    };
    db::games::Entity::insert(game)
        .exec(&state.db)
        .await
        .map_err(|e| {
            log::error!("Failed to insert new game: {e}");
            AppHttpError::Internal
        })?;
    Ok(
        web::Redirect::to(format!("{}/", state.config.site_base_url_path))
            .see_other()
            .respond_to(&req),
    )
}
