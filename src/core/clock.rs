/// Main clock — drives the once-per-second render loop and frame output.
use anyhow::{Context, Result};
use tokio::time::{self, Duration};
use tracing::{debug, info};

use crate::config::{ClockConfig, OutputMode};
use crate::render::engine::RenderEngine;
use crate::render::face::{FaceRenderer, FaceTime};

/// Timer period. The renderer reads live time every tick, so jitter does
/// not accumulate.
const TICK_MS: u64 = 1000;

pub struct Clock {
    config: ClockConfig,
    renderer: FaceRenderer,
    engine: RenderEngine,
}

impl Clock {
    pub fn new(config: ClockConfig) -> Result<Self> {
        let engine = RenderEngine::new(config.width, config.height, config.theme.background)?;
        Ok(Self {
            config,
            renderer: FaceRenderer::new(),
            engine,
        })
    }

    /// Main render loop. Every tick reads the wall clock fresh, lays out
    /// the face, rasterizes it, and emits the frame.
    pub async fn run(&mut self) -> Result<()> {
        let mut interval = time::interval(Duration::from_millis(TICK_MS));
        let mut frames_rendered: u64 = 0;

        info!(
            "Starting clock loop: {}x{}, output: {:?}",
            self.config.width, self.config.height, self.config.output_mode
        );

        loop {
            interval.tick().await;

            let time = FaceTime::now();
            let list = self.renderer.render(
                time,
                self.engine.width(),
                self.engine.height(),
                &self.config.theme,
            );
            self.engine.render_frame(&list);

            match self.config.output_mode {
                OutputMode::Png => {
                    self.engine
                        .save_png(&self.config.output_path)
                        .context("Failed to save PNG output")?;
                    debug!(
                        "Saved frame {} to {}",
                        frames_rendered,
                        self.config.output_path.display()
                    );
                }
                OutputMode::Raw => {
                    use std::io::Write;
                    std::io::stdout()
                        .write_all(self.engine.pixels())
                        .context("Failed to write raw frame")?;
                }
            }

            frames_rendered += 1;
            if self.config.frames > 0 && frames_rendered >= self.config.frames {
                info!("Rendered {} frame(s), exiting", frames_rendered);
                break;
            }
        }

        Ok(())
    }
}
