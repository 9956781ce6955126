// Argument translation core plus the ffmpeg launcher around it

pub mod core;
pub mod launch;

pub use core::*;
pub use launch::{LAUNCH_FAILURE_EXIT_CODE, LaunchError};
