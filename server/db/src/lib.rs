pub mod prelude;

pub mod games;
pub mod matches;
