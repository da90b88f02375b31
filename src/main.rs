use clap::Parser;
use macroquad::logging::{error, info};
use macroquad::prelude::*;

use weighted_random_graph::app::renderer::Renderer;
use weighted_random_graph::app::user_settings::{Command, UserSettings};
use weighted_random_graph::app::hud;
use weighted_random_graph::config::Config;
use weighted_random_graph::graph::Graph;
use weighted_random_graph::histogram::{Histogram, HistogramError};

#[macroquad::main("Weighted Random Graph")]
async fn main() {
    let cfg = Config::parse();
    if let Err(e) = run(cfg).await {
        error!("{}", e);
    }
}

async fn run(cfg: Config) -> Result<(), HistogramError> {
    let mut rng = cfg.rng();
    let mut settings = UserSettings::from_config(&cfg);
    let mut histogram = Histogram::new(settings.shape, settings.buckets)?;
    let mut renderer = Renderer::new();
    let mut graph = Graph::new(renderer.screen());

    info!(
        "Sampling {} into {} buckets, {} per frame",
        histogram.shape().name(),
        histogram.buckets(),
        cfg.samples_per_frame
    );

    loop {
        clear_background(BLACK);

        // user commands
        match settings.handle_input() {
            Some(Command::Reconfigure { shape, buckets }) => {
                histogram.reconfigure(shape, buckets)?;
            }
            Some(Command::Reset) => histogram.reset(),
            None => {}
        }

        // weighted samples into buckets
        if !settings.paused {
            for _ in 0..cfg.samples_per_frame {
                histogram.tick(&mut rng);
            }
        }

        graph.set_weights(&histogram.weights());
        renderer.update(&mut graph);

        renderer.draw(&graph);
        hud::draw(&settings, &histogram, &graph);

        next_frame().await
    }
}
