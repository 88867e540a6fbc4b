pub mod analyze;
pub mod chat;
