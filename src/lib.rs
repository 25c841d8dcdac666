//! contest-vote - voting and results service for a song contest
//!
//! Registered users score artists and predict finalists during the
//! semi-finals and the grand final; admins curate the official grand-final
//! line-up. State lives in a handful of JSON documents.

pub mod auth;
pub mod cli;
pub mod config;
pub mod contest;
pub mod http_server;
pub mod model;
pub mod store;
