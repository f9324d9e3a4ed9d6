pub mod food_safety;
pub mod health;
pub mod preferences;
pub mod server;
pub mod vocabulary;
