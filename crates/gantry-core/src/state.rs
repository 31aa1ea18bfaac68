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

//! The launch state machine.

/// Where a launch stands.
///
/// There is a single one-way transition out of [`Uninitialized`], triggered
/// by the startup event. Once settled, the state never changes again; the
/// frame-by-frame life of the game belongs to the runner, not the launch
/// path.
///
/// [`Uninitialized`]: LaunchState::Uninitialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchState {
    /// The startup event has not fired yet.
    #[default]
    Uninitialized,
    /// The game was resolved and handed to the runner.
    Initialized,
    /// The launch sequence failed; the runner never received a game.
    Failed,
}

impl LaunchState {
    /// Returns `true` once the one-way transition has happened, in either
    /// direction.
    #[must_use]
    pub fn is_settled(self) -> bool {
        !matches!(self, LaunchState::Uninitialized)
    }
}
