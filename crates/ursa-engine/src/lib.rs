//! URSA engine crate.
//!
//! Geometry, font metrics, draw recording, input translation and frame timing
//! shared by the immediate-mode UI layer.

pub mod coords;
pub mod input;
pub mod logging;
pub mod scene;
pub mod text;
pub mod time;
