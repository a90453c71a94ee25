//! ecopatrol - Headless core of the EcoPatrol map client: geofenced
//! viewport guard, onboarding tour engine, and air-quality lookup

pub mod api;
pub mod config;
pub mod geometry;
pub mod map;
pub mod onboarding;
pub mod region;
pub mod store;
pub mod tour;
