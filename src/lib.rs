//! Core of the above-you sky and weather viewer.
//!
//! Weather, celestial body positions, reverse geocoding and the ISS ground point are fetched
//! through a [`sky_source::SkySource`]. Every fetch and every authentication flow runs through
//! the [`orchestrator::RequestOrchestrator`], which keeps the per-module loading flags,
//! error and success messages of [`state`] up to date.
#![allow(clippy::module_name_repetitions)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]

pub mod logger;

pub mod celestial;
pub mod config;
pub mod geo;
pub mod http_handler;
pub mod keychain;
pub mod orchestrator;
pub mod polling;
pub mod sky_source;
pub mod state;
pub mod weather;

#[cfg(test)]
mod test_support;
