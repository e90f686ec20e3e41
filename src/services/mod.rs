pub mod ai;
pub mod locations;
pub mod parser;
pub mod places;
pub mod recommend;
