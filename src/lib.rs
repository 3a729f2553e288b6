pub mod models;
pub mod prompts;
pub mod routes;
pub mod services;
