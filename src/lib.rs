//! # Land Cover Viewer
//!
//! Client-side engine for a satellite land-cover classification viewer.
//!
//! This crate drives the interaction between a map-based frontend and a
//! classification backend: the user draws a rectangle, the crate validates
//! it, submits it for analysis, and turns the backend's response into typed
//! statistics tabs and result images.
//!
//! ## Features
//!
//! - **Selection validation**: physical size and zoom bounds checked before
//!   any network traffic
//! - **Request coordination**: one in-flight analysis at a time, with
//!   supersession when the user redraws mid-flight
//! - **Typed results**: percentage, area, density, adjacency and
//!   fragmentation tabs decoded into view models
//! - **Image views**: original, mask, blended and residential overlays with
//!   download support
//!
//! ## Architecture
//!
//! - [`api`]: consolidated public surface and identifier newtypes
//! - [`client`]: reqwest-based HTTP client and wire DTOs
//! - [`config`]: `viewer.toml` configuration
//! - [`models`]: selection geometry, parameters, statistics, results
//! - [`services`]: coordinator, progress panel, presenter, exports
//! - [`tabs`]: per-tab view-model computation

pub mod api;

pub mod client;
pub mod config;
pub mod models;

pub mod services;

pub mod tabs;
