// lib.rs - Conway's Game of Life for addressable LED panels
//
// The world is a toroidal grid of cell ages. Each generation is rendered into a
// Frame in the panel's wiring order and handed to a DisplaySink; when the run
// stagnates, dies out, or grows too old, the world is reseeded.

pub mod clock;
pub mod config;
pub mod engine;
mod error;
pub mod frame;
pub mod grid;
pub mod mapper;
pub mod neighbours;
pub mod palette;
pub mod patterns;
pub mod simulation;
pub mod sink;
pub mod stagnation;

pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::config::{ColorMode, Config, ConfigArgs, Wiring};
pub use crate::engine::{GenerationEngine, GenerationStats};
pub use crate::error::{Error, Result};
pub use crate::frame::Frame;
pub use crate::grid::{Age, WorldGrid};
pub use crate::mapper::CoordinateMapper;
pub use crate::neighbours::count_neighbours;
pub use crate::palette::Palette;
pub use crate::simulation::{Phase, SimulationLoop, SimulationState, Tick};
pub use crate::sink::{DisplaySink, RecordingSink, TerminalSink};
pub use crate::stagnation::{ResetReason, StagnationDetector, StagnationState};
