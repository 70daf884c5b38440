/// Composition root of the library
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Deferred results of background operations
pub mod promise;
/// Module containing the resource services
pub mod services;
