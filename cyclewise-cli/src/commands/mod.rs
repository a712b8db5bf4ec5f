pub mod chat;
pub mod config;
pub mod cycle;
pub mod facilities;
pub mod symptoms;
