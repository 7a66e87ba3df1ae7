//! Demo integration
//!
//! Provides [`DemoClimate`], a climate entity backed by nothing but its own
//! fields, and [`setup_platform`], which hands it to a climate platform.

mod climate;

pub use climate::{setup_platform, DemoClimate, DEFAULT_NAME, PLATFORM};
