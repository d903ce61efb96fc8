pub mod auth;
pub mod migration;
pub mod site_config;
pub mod workshops;
