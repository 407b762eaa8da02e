//! SDL2 backend for the crosspad input model.
//!
//! Translates SDL joystick/game-controller/haptic state into the unified
//! snapshot types. Device hot-plug events are drained synchronously into the
//! slot registry at the top of every poll; no background thread is involved.

mod backend;
mod convert;
mod device;

pub use backend::{SdlBackend, MAX_PADS};
