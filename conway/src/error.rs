// error.rs - Error type shared by every part of the simulation

use thiserror::Error;

use crate::config::Wiring;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while building or driving a simulation.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is zero, or `width * height` does not fit in memory.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// A configuration value outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// A cell edit named a coordinate outside the world.
    #[error("cell ({x}, {y}) is outside the world")]
    CellOutOfRange { x: usize, y: usize },

    /// A frame built for one panel size was handed to a sink for another.
    #[error("frame is {actual_width}x{actual_height}, sink expects {expected_width}x{expected_height}")]
    FrameSize {
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },

    /// A frame laid out for one LED wiring was handed to a sink wired another way.
    #[error("frame uses {actual:?} wiring, sink expects {expected:?}")]
    FrameWiring { expected: Wiring, actual: Wiring },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
