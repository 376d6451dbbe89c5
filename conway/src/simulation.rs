// simulation.rs - Seed / step / reset cycle that runs for the life of the process
//
//   Seeding --> Stepping --(reset flag)--> Resetting --> Seeding ...
//
// Each tick performs one transition. `run` ticks forever and sleeps through a
// Clock after every generation; hosts with their own event loop call `tick` on
// their own timer instead.

use std::convert::Infallible;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{Error, Result};
use crate::clock::Clock;
use crate::config::Config;
use crate::engine::{GenerationEngine, GenerationStats};
use crate::frame::Frame;
use crate::grid::{Age, WorldGrid};
use crate::mapper::CoordinateMapper;
use crate::palette::Palette;
use crate::patterns::{self, Pattern};
use crate::sink::DisplaySink;
use crate::stagnation::{ResetReason, StagnationDetector, StagnationState};

/// Everything that changes from one generation to the next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    pub(crate) grid: WorldGrid,
    pub stats: GenerationStats,
    pub stagnation: StagnationState,
    /// Raised by [`StagnationDetector::check_reset`]; cleared only by reseeding.
    pub reset: Option<ResetReason>,
}

impl SimulationState {
    #[must_use]
    pub fn new(grid: WorldGrid) -> Self {
        Self {
            grid,
            stats: GenerationStats::default(),
            stagnation: StagnationState::default(),
            reset: None,
        }
    }

    /// The world. Only the loop may replace it, so its size never changes.
    #[must_use]
    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    fn zero_counters(&mut self) {
        self.stats = GenerationStats::default();
        self.stagnation = StagnationState::default();
        self.reset = None;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Seeding,
    Stepping,
    Resetting(ResetReason),
}

/// What a single [`SimulationLoop::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// A fresh world was seeded.
    Seeded,
    /// A frame was presented and one generation computed.
    Stepped(GenerationStats),
    /// The run ended; the next tick reseeds.
    Reset(ResetReason),
}

pub struct SimulationLoop<R = StdRng> {
    config: Config,
    palette: Palette,
    engine: GenerationEngine,
    detector: StagnationDetector,
    state: SimulationState,
    frame: Frame,
    phase: Phase,
    rng: R,
}

impl SimulationLoop<StdRng> {
    /// Creates a loop seeded from `config.seed`, or from entropy when unset.
    pub fn new(config: Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> SimulationLoop<R> {
    pub fn with_rng(config: Config, rng: R) -> Result<Self> {
        config.validate()?;
        let mapper = CoordinateMapper::new(config.width(), config.height(), config.wiring)?;
        Ok(Self {
            palette: Palette::new(config.color_mode),
            engine: GenerationEngine::new(),
            detector: StagnationDetector::from_config(&config),
            state: SimulationState::new(WorldGrid::new(config.width(), config.height())?),
            frame: Frame::new(mapper),
            phase: Phase::Seeding,
            rng,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Sets the age of one cell between ticks.
    pub fn set_cell(&mut self, x: usize, y: usize, age: Age) -> Result<()> {
        let grid = &mut self.state.grid;
        if x >= grid.width() || y >= grid.height() {
            return Err(Error::CellOutOfRange { x, y });
        }
        grid.set(x, y, age);
        Ok(())
    }

    /// Kills every cell, then draws `pattern` with its corner at `(x, y)`, wrapping past edges.
    pub fn apply_pattern(&mut self, pattern: &Pattern, x: usize, y: usize) {
        patterns::apply_pattern(&mut self.state.grid, pattern, x, y);
    }

    /// Kills every cell.
    pub fn clear_cells(&mut self) {
        self.state.grid.clear();
    }

    /// The frame most recently handed to the sink.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Blanks the sink and applies the configured brightness.
    pub fn start<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) -> Result<()> {
        sink.clear()?;
        sink.set_brightness(self.config.brightness);
        Ok(())
    }

    /// Performs one state-machine transition. Never sleeps.
    pub fn tick<S: DisplaySink + ?Sized>(&mut self, sink: &mut S) -> Result<Tick> {
        match self.phase {
            Phase::Seeding => {
                self.seed();
                self.phase = Phase::Stepping;
                Ok(Tick::Seeded)
            }
            Phase::Stepping => {
                self.frame.render(&self.state.grid, &self.palette);
                sink.present(&self.frame)?;

                self.engine.step(&mut self.state.grid, &mut self.state.stats);
                let stats = self.state.stats;
                debug!(
                    "generation {} alive {} changed {} (previous {})",
                    stats.generation,
                    stats.cells_alive,
                    stats.changed_count,
                    stats.previous_changed_count
                );

                if self.detector.check_reset(&mut self.state) {
                    if let Some(reason) = self.state.reset {
                        self.phase = Phase::Resetting(reason);
                    }
                }
                Ok(Tick::Stepped(stats))
            }
            Phase::Resetting(reason) => {
                info!(
                    "reset after generation {}: {reason}",
                    self.state.stats.generation
                );
                self.state.reset = None;
                self.phase = Phase::Seeding;
                Ok(Tick::Reset(reason))
            }
        }
    }

    /// Ticks `count` times, sleeping the generation delay after each step.
    pub fn run_for<S, C>(&mut self, sink: &mut S, clock: &mut C, count: usize) -> Result<()>
    where
        S: DisplaySink + ?Sized,
        C: Clock + ?Sized,
    {
        for _ in 0..count {
            if let Tick::Stepped(_) = self.tick(sink)? {
                clock.sleep(self.config.generation_delay);
            }
        }
        Ok(())
    }

    /// Runs until the sink fails. There is no other way out.
    pub fn run<S, C>(&mut self, sink: &mut S, clock: &mut C) -> Result<Infallible>
    where
        S: DisplaySink + ?Sized,
        C: Clock + ?Sized,
    {
        self.start(sink)?;
        loop {
            if let Tick::Stepped(_) = self.tick(sink)? {
                clock.sleep(self.config.generation_delay);
            }
        }
    }

    fn seed(&mut self) {
        match self.config.seed_pattern {
            Some(pattern) => patterns::apply_centered(&mut self.state.grid, pattern),
            None => self.state.grid.randomize(&mut self.rng),
        }
        self.state.zero_counters();
        info!(
            "seeded {}x{} world with {} live cells",
            self.state.grid.width(),
            self.state.grid.height(),
            self.state.grid.alive_count()
        );
    }
}
