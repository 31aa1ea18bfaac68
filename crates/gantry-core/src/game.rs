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

//! The lifecycle capability contract a launched game must satisfy.

/// The lifecycle interface a runner invokes on the game it owns.
///
/// A value only qualifies as a launchable game if it exposes all six
/// callbacks. The runner drives them in a fixed order: [`create`] exactly
/// once before anything else, then [`resize`] and [`render`] as its loop
/// dictates, with [`pause`]/[`resume`] around host-driven interruptions,
/// and [`dispose`] exactly once at the end of the game's life.
///
/// [`create`]: Game::create
/// [`resize`]: Game::resize
/// [`render`]: Game::render
/// [`pause`]: Game::pause
/// [`resume`]: Game::resume
/// [`dispose`]: Game::dispose
pub trait Game: Send {
    /// Called once, before any other callback, when the runner takes
    /// ownership of the game.
    fn create(&mut self);

    /// Called every frame. `dt` is the time since the previous frame,
    /// in seconds.
    fn render(&mut self, dt: f32);

    /// Called when the drawing surface changes size, and at least once
    /// before the first [`render`](Game::render).
    fn resize(&mut self, width: u32, height: u32);

    /// Called when the host takes the game out of the foreground.
    fn pause(&mut self) {}

    /// Called when the host brings the game back to the foreground.
    fn resume(&mut self) {}

    /// Called once, last. No callback follows it.
    fn dispose(&mut self);
}

/// The opaque, owned handle to a game.
///
/// Resolved once per process lifetime at startup. Ownership transfers to
/// the runner on successful initialization; the launch path holds no
/// reference afterward.
pub type GameHandle = Box<dyn Game>;
