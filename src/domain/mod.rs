pub mod export;
pub mod options;
pub mod script;
