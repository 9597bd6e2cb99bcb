pub mod export;
pub mod health;
pub mod options;
pub mod script;
