use crate::handlers::prelude::*;

#[derive(Serialize)]
struct NewGamePageData {
    action: String,
    method: &'static str,
    fields: [&'static str; 4],
}

#[get("/nuovo_gioco")]
pub async fn get_new_game(req: HttpRequest) -> HttpResult {
    let state = server_state(&req)?;
    Ok(HttpResponse::Ok().json(NewGamePageData {
        action: format!("{}/nuovo_gioco", state.config.site_base_url_path),
        method: "POST",
        fields: ["name", "max_players", "average_duration", "category"],
    }))
}
