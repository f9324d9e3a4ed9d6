pub mod db;
pub mod preferences;
