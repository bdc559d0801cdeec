//! HTTP request handlers for the climate API.

pub mod health;
pub mod home;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;
