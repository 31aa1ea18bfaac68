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

// Gantry sandbox
// Minimal end-to-end demo of the launch path

use anyhow::Result;
use gantry_launch::prelude::*;

/// A point drifting across a wrapping surface. Just enough state to show
/// the lifecycle callbacks doing real work.
struct DriftGame {
    position: (f32, f32),
    velocity: (f32, f32),
    surface: (f32, f32),
    frames: u64,
    paused: bool,
}

impl DriftGame {
    fn new() -> Self {
        Self {
            position: (0.0, 0.0),
            velocity: (48.0, 27.0),
            surface: (0.0, 0.0),
            frames: 0,
            paused: false,
        }
    }
}

impl Game for DriftGame {
    fn create(&mut self) {
        log::info!("DriftGame: created");
    }

    fn render(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        self.position.0 = (self.position.0 + self.velocity.0 * dt).rem_euclid(self.surface.0);
        self.position.1 = (self.position.1 + self.velocity.1 * dt).rem_euclid(self.surface.1);
        self.frames += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.surface = (width as f32, height as f32);
        log::info!("DriftGame: surface is {width}x{height}");
    }

    fn pause(&mut self) {
        self.paused = true;
        log::info!("DriftGame: paused at frame {}", self.frames);
    }

    fn resume(&mut self) {
        self.paused = false;
        log::info!("DriftGame: resumed");
    }

    fn dispose(&mut self) {
        log::info!(
            "DriftGame: disposed after {} frames at ({:.1}, {:.1})",
            self.frames,
            self.position.0,
            self.position.1
        );
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut registry = ModuleRegistry::new();
    registry.install("sandbox.core", |scope| {
        scope.bind_game("game", || Box::new(DriftGame::new()));
        Ok(())
    });

    let manifest = LaunchManifest::new("sandbox.core", "game");
    let runner = HeadlessRunner::new(240).with_surface(800, 600);

    let mut launcher = Launcher::new(DefaultHost, registry, manifest, runner);
    launcher.on_create(&SavedState::empty());

    match launcher.state() {
        LaunchState::Initialized => {
            log::info!(
                "sandbox: done, {} frames rendered",
                launcher.runner().frames_rendered()
            );
            Ok(())
        }
        _ => anyhow::bail!("sandbox launch failed"),
    }
}
