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

//! The modules packaged into this binary.
//!
//! A real project build stamps its own game modules in here; the stock
//! binary ships a single placeholder so the default manifest launches
//! something observable.

use gantry_core::Game;
use gantry_launch::ModuleRegistry;

/// A placeholder game: logs its lifecycle and counts frames.
#[derive(Default)]
struct BlankGame {
    frames: u64,
}

impl Game for BlankGame {
    fn create(&mut self) {
        log::info!("BlankGame: created");
    }

    fn render(&mut self, _dt: f32) {
        self.frames += 1;
    }

    fn resize(&mut self, width: u32, height: u32) {
        log::info!("BlankGame: surface is {width}x{height}");
    }

    fn dispose(&mut self) {
        log::info!("BlankGame: disposed after {} frames", self.frames);
    }
}

/// Installs every packaged module into `registry`.
pub fn install_packaged(registry: &mut ModuleRegistry) {
    registry.install("gantry.blank", |scope| {
        scope.bind_game("game", || Box::new(BlankGame::default()));
        Ok(())
    });
}
