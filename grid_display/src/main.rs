// main.rs - LED panel preview window driving the simulation loop

use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use conway::{Config, ConfigArgs, CoordinateMapper, DisplaySink, Frame, SimulationLoop};
use eframe::egui;
use smart_leds::RGB8;

mod ui;

/// Preview Conway's Game of Life on a simulated LED panel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,

    /// On-screen size of one LED in points
    #[arg(long, default_value_t = 24.0)]
    led_size: f32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::try_from(cli.config).context("invalid configuration")?;
    let app = GridDisplay::new(config, cli.led_size).context("failed to build simulation")?;

    let (width, height) = app.window_size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([width, height]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway LED Panel",
        options,
        Box::new(|_cc| Box::new(app)),
    )
    .map_err(|err| anyhow::anyhow!("window failed: {err}"))
}

/// Display sink that latches frames for the next repaint.
pub struct PanelSink {
    mapper: CoordinateMapper,
    pixels: Vec<RGB8>,
    brightness: u8,
}

impl PanelSink {
    fn new(mapper: CoordinateMapper) -> Self {
        Self {
            mapper,
            pixels: vec![RGB8::default(); mapper.pixel_count()],
            brightness: u8::MAX,
        }
    }

    /// Wiring the latched pixels are ordered by.
    pub fn mapper(&self) -> &CoordinateMapper {
        &self.mapper
    }

    /// Latched pixels in LED chain order.
    pub fn pixels(&self) -> &[RGB8] {
        &self.pixels
    }
}

impl DisplaySink for PanelSink {
    fn clear(&mut self) -> conway::Result<()> {
        self.pixels.fill(RGB8::default());
        Ok(())
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = level;
    }

    fn present(&mut self, frame: &Frame) -> conway::Result<()> {
        conway::sink::check_frame(&self.mapper, frame)?;
        self.pixels = conway::sink::dim(frame.pixels(), self.brightness);
        Ok(())
    }
}

pub struct GridDisplay {
    pub sim: SimulationLoop,
    pub sink: PanelSink,
    pub is_running: bool,
    pub last_update: Instant,
    pub led_size: f32,
}

impl GridDisplay {
    fn new(config: Config, led_size: f32) -> conway::Result<Self> {
        let mut sim = SimulationLoop::new(config)?;
        let mut sink = PanelSink::new(*sim.frame().mapper());
        sim.start(&mut sink)?;
        Ok(Self {
            sim,
            sink,
            is_running: true,
            last_update: Instant::now(),
            led_size,
        })
    }

    fn window_size(&self) -> (f32, f32) {
        let config = self.sim.config();
        let spacing = self.led_size * 0.15;
        let panel_width = (self.led_size + spacing) * config.width() as f32;
        let panel_height = (self.led_size + spacing) * config.height() as f32;
        (panel_width.max(420.0) + 32.0, panel_height + 140.0)
    }

    /// Ticks until one generation has been presented, so seeding and resets don't cost a frame interval.
    pub fn advance(&mut self) {
        for _ in 0..3 {
            match self.sim.tick(&mut self.sink) {
                Ok(conway::Tick::Stepped(_)) => return,
                Ok(_) => {}
                Err(err) => {
                    log::warn!("pausing: {err}");
                    self.is_running = false;
                    return;
                }
            }
        }
    }
}
