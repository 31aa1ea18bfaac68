// Copyright 2026 gantry contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A windowless reference runner.
//!
//! Drives the full lifecycle of the game it is handed, synchronously and
//! without any graphics stack: create, an initial resize to its virtual
//! surface, a budgeted number of fixed-timestep frames, one pause/resume
//! cycle, then dispose. Useful for demos, smoke tests, and any host without
//! a display.

use gantry_core::{GameHandle, Runner, RunnerError};

const DEFAULT_SURFACE: (u32, u32) = (1280, 720);
const FIXED_TIMESTEP: f32 = 1.0 / 60.0;

/// A [`Runner`] that drives the lifecycle eagerly inside
/// [`initialize`](Runner::initialize) instead of owning an event loop.
#[derive(Debug)]
pub struct HeadlessRunner {
    frame_budget: u32,
    surface: (u32, u32),
    frames_rendered: u32,
    initialized: bool,
}

impl HeadlessRunner {
    /// Creates a runner that renders `frame_budget` frames before shutting
    /// the game down.
    #[must_use]
    pub fn new(frame_budget: u32) -> Self {
        Self {
            frame_budget,
            surface: DEFAULT_SURFACE,
            frames_rendered: 0,
            initialized: false,
        }
    }

    /// Overrides the virtual surface size reported to the game.
    #[must_use]
    pub fn with_surface(mut self, width: u32, height: u32) -> Self {
        self.surface = (width, height);
        self
    }

    /// Frames rendered so far.
    #[must_use]
    pub fn frames_rendered(&self) -> u32 {
        self.frames_rendered
    }

    /// Whether the runner has owned a game.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Runner for HeadlessRunner {
    fn initialize(&mut self, mut game: GameHandle) -> Result<(), RunnerError> {
        if self.initialized {
            return Err(RunnerError::AlreadyInitialized);
        }
        self.initialized = true;

        log::info!(
            "HeadlessRunner: driving {} frames at {}x{}",
            self.frame_budget,
            self.surface.0,
            self.surface.1
        );

        game.create();
        game.resize(self.surface.0, self.surface.1);

        for _ in 0..self.frame_budget {
            game.render(FIXED_TIMESTEP);
            self.frames_rendered += 1;
        }

        // One background/foreground cycle so pause-sensitive games get
        // exercised even without a real host.
        game.pause();
        game.resume();

        game.dispose();
        log::info!(
            "HeadlessRunner: game disposed after {} frames",
            self.frames_rendered
        );
        Ok(())
    }
}
