pub mod app_config;
pub mod clock;
pub mod error;
pub mod lifecycle;
pub mod poll;
pub mod reaction;
pub mod store;
pub mod voting;
pub mod web;
