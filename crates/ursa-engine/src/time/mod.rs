//! Time subsystem.
//!
//! One `FrameClock` per frame loop: call `tick()` once per frame to obtain
//! `FrameTime`, then sleep for `remaining_frame_budget()` when pacing.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
