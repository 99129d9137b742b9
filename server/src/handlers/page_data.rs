use crate::handlers::prelude::*;

#[derive(Serialize, Clone, Debug)]
pub struct GameData {
    pub id: i64,
    pub name: String,
    pub max_players: i32,
    pub average_duration: i32,
    pub category: String,
    pub url: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct MatchData {
    pub id: i64,
    pub date: String,
    pub winner: String,
    pub winner_score: i32,
}

pub fn game_data(base_url_path: &str, g: db::games::Model) -> GameData {
    GameData {
        url: format!("{base_url_path}/gioco/{}", g.id),
        id: g.id,
        name: g.name,
        max_players: g.max_players,
        average_duration: g.average_duration,
        category: g.category,
    }
}

pub fn match_data(m: db::matches::Model) -> MatchData {
    MatchData {
        id: m.id,
        date: format_date(m.date),
        winner: m.winner,
        winner_score: m.winner_score,
    }
}

// Most recent match first; id breaks ties between same-day matches.
pub async fn db_matches_of_game(
    db: &DatabaseConnection,
    game_id: i64,
) -> Result<Vec<db::matches::Model>, DbErr> {
    db::matches::Entity::find()
        .filter(db::matches::Column::GameId.eq(game_id))
        .order_by_desc(db::matches::Column::Date)
        .order_by_desc(db::matches::Column::Id)
        .all(db)
        .await
}

pub fn format_date(date: time::Date) -> String {
    let format = time::macros::format_description!("[year]-[month]-[day]");
    date.format(&format).unwrap()
}
