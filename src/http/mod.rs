//! HTTP client layer — `FoodiesHttp`, one method per API endpoint.

pub mod client;

pub use client::FoodiesHttp;
