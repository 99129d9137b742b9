pub use super::games::Entity as Games;
pub use super::matches::Entity as Matches;
