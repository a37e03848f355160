// Copyright @yucwang 2021

use crate::core::error::Result;
use crate::core::integrator::Integrator;
use crate::core::sampler::{LcgSampler, Sampler};
use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::color::Color;
use crate::math::constants::{Float, Vector2f};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

const BLOCK_SIZE: usize = 32;

/// Tiled multi-threaded renderer. Every pixel owns a sampler seeded from
/// (seed, x, y), so the image does not depend on the thread count.
pub struct SimpleRenderer {
    integrator: Box<dyn Integrator>,
    spp: u32,
    seed: u64,
    show_progress: bool,
}

struct Block {
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
    pixels: Vec<Color>,
}

impl SimpleRenderer {
    pub fn new(integrator: Box<dyn Integrator>, spp: u32, seed: u64) -> Self {
        Self {
            integrator,
            spp: spp.max(1),
            seed,
            show_progress: true,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Average of `spp` estimates for pixel (x, y).
    pub fn render_pixel(&self, scene: &Scene, sensor: &dyn Sensor, x: usize, y: usize) -> Color {
        let (width, height) = sensor.resolution();
        let mut sampler = LcgSampler::for_pixel(self.seed, x, y);
        let mut color = Color::black();
        for _ in 0..self.spp {
            let jitter = sampler.next_2d();
            let u = Vector2f::new((x as Float + jitter.x) / width as Float,
                                  (y as Float + jitter.y) / height as Float);
            let ray = sensor.sample_ray(&u);
            color += self.integrator.li(scene, &ray, &mut sampler);
        }
        let mut color = color * (1.0 / self.spp as Float);
        color[3] = 1.0;
        color
    }

    fn render_block(&self, scene: &Scene, sensor: &dyn Sensor,
                    x0: usize, y0: usize, x1: usize, y1: usize) -> Block {
        let mut pixels = Vec::with_capacity((x1 - x0) * (y1 - y0));
        for y in y0..y1 {
            for x in x0..x1 {
                pixels.push(self.render_pixel(scene, sensor, x, y));
            }
        }
        Block { x0, y0, x1, y1, pixels }
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene) -> Result<Bitmap> {
        let sensor = scene.camera()?;
        let (width, height) = sensor.resolution();
        let mut bitmap = Bitmap::new(width, height);
        if width == 0 || height == 0 {
            return Ok(bitmap);
        }

        let blocks_x = (width + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let blocks_y = (height + BLOCK_SIZE - 1) / BLOCK_SIZE;
        let total_blocks = blocks_x * blocks_y;

        log::info!("Rendering {}x{} at {} spp with {}.",
                   width, height, self.spp, self.integrator.describe());

        let progress = if self.show_progress {
            ProgressBar::new(total_blocks as u64)
        } else {
            ProgressBar::hidden()
        };
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} blocks")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_block = Arc::new(AtomicUsize::new(0));
        let thread_count = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1);
        let (tx, rx) = mpsc::channel::<Block>();

        thread::scope(|scope| {
            for _ in 0..thread_count {
                let next_block = Arc::clone(&next_block);
                let tx = tx.clone();
                scope.spawn(move || {
                    loop {
                        let block_index = next_block.fetch_add(1, Ordering::Relaxed);
                        if block_index >= total_blocks {
                            break;
                        }

                        let x0 = (block_index % blocks_x) * BLOCK_SIZE;
                        let y0 = (block_index / blocks_x) * BLOCK_SIZE;
                        let x1 = (x0 + BLOCK_SIZE).min(width);
                        let y1 = (y0 + BLOCK_SIZE).min(height);
                        let block = self.render_block(scene, sensor, x0, y0, x1, y1);
                        if tx.send(block).is_err() {
                            break;
                        }
                    }
                });
            }

            drop(tx);
            for block in rx.iter() {
                let block_width = block.x1 - block.x0;
                for y in block.y0..block.y1 {
                    for x in block.x0..block.x1 {
                        bitmap[(x, y)] = block.pixels[(x - block.x0) + block_width * (y - block.y0)];
                    }
                }
                progress.inc(1);
            }
        });
        progress.finish_and_clear();

        Ok(bitmap)
    }
}
