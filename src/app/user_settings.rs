use macroquad::prelude::*;

use crate::config::Config;
use crate::histogram::{MAX_BUCKETS, MIN_BUCKETS};
use crate::random_util::DensityShape;

// change requested by the user this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Reconfigure { shape: DensityShape, buckets: usize },
    Reset,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Input {
    pub cycle_shape: bool,
    pub more_buckets: bool,
    pub fewer_buckets: bool,
    pub reset: bool,
    pub toggle_pause: bool,
}

impl Input {
    pub fn poll() -> Self {
        Self {
            cycle_shape: is_key_pressed(KeyCode::Tab),
            more_buckets: is_key_pressed(KeyCode::Up),
            fewer_buckets: is_key_pressed(KeyCode::Down),
            reset: is_key_pressed(KeyCode::R),
            toggle_pause: is_key_pressed(KeyCode::Space),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserSettings {
    pub shape: DensityShape,
    pub buckets: usize,
    pub paused: bool,
}

impl UserSettings {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            shape: cfg.shape,
            buckets: cfg.buckets,
            paused: false,
        }
    }

    pub fn handle_input(&mut self) -> Option<Command> {
        self.apply(Input::poll())
    }

    /*
     * Folds one frame of input into the settings. A shape or bucket change
     * wins over a reset, since reconfiguring clears the counts anyway.
     */
    pub fn apply(&mut self, input: Input) -> Option<Command> {
        if input.toggle_pause {
            self.paused = !self.paused;
        }

        let mut shape = self.shape;
        let mut buckets = self.buckets;
        if input.cycle_shape {
            shape = shape.next();
        }
        if input.more_buckets {
            buckets = (buckets + 1).min(MAX_BUCKETS);
        }
        if input.fewer_buckets {
            buckets = buckets.saturating_sub(1).max(MIN_BUCKETS);
        }

        if shape != self.shape || buckets != self.buckets {
            self.shape = shape;
            self.buckets = buckets;
            return Some(Command::Reconfigure { shape, buckets });
        }

        input.reset.then_some(Command::Reset)
    }
}
