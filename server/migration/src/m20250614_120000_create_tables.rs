use ludoteca_db::{games, matches, prelude::*};
use sea_orm::{EntityTrait, Set};
use sea_orm_migration::prelude::*;
use time::macros::date;

#[derive(DeriveMigrationName)]
pub struct Migration;

fn idx<E: EntityTrait>(s: &sea_orm::Schema, e: E) -> Vec<IndexCreateStatement> {
    s.create_index_from_entity(e)
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        let s = sea_orm::Schema::new(m.get_database_backend());
        m.create_table(s.create_table_from_entity(Games)).await?;
        m.create_table(s.create_table_from_entity(Matches)).await?;
        let s = &s;
        for i in [idx(s, Games), idx(s, Matches)].into_iter().flatten() {
            m.create_index(i).await?;
        }
        populate_database(m).await
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        m.drop_table(Table::drop().table(Matches).if_exists().to_owned())
            .await?;
        m.drop_table(Table::drop().table(Games).if_exists().to_owned())
            .await?;
        Ok(())
    }
}

// Deterministic demo content matching the initial release of the tracker.
async fn populate_database<'a>(m: &'a SchemaManager<'a>) -> Result<(), DbErr> {
    let db = m.get_connection();
    let seed_games = [
        ("Catan", 4, 90, "Strategia"),
        ("Dixit", 6, 30, "Party"),
        ("Ticket to Ride", 5, 60, "Strategia"),
    ];
    let mut game_ids = Vec::with_capacity(seed_games.len());
    for (name, max_players, average_duration, category) in seed_games {
        let game = games::ActiveModel {
            name: Set(name.to_owned()),
            max_players: Set(max_players),
            average_duration: Set(average_duration),
            category: Set(category.to_owned()),
            ..Default::default()
        };
        game_ids.push(games::Entity::insert(game).exec(db).await?.last_insert_id);
    }
    let seed_matches = [
        (game_ids[0], date!(2023 - 10 - 15), "Alice", 10),
        (game_ids[0], date!(2023 - 10 - 22), "Bob", 12),
        (game_ids[1], date!(2023 - 11 - 05), "Charlie", 25),
        (game_ids[2], date!(2023 - 11 - 10), "Alice", 8),
    ];
    for (game_id, date, winner, winner_score) in seed_matches {
        let row = matches::ActiveModel {
            game_id: Set(game_id),
            date: Set(date),
            winner: Set(winner.to_owned()),
            winner_score: Set(winner_score),
            ..Default::default()
        };
        matches::Entity::insert(row).exec(db).await?;
    }
    Ok(())
}
