pub mod health;
pub mod locations;
pub mod query;
pub mod recommend;
