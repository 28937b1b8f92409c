pub mod analysis;
pub mod chat;
pub mod game;
pub mod health;
pub mod learn;
pub mod puzzle;
pub mod stats;
