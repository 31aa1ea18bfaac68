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

//! The framework boundary: the entry point that takes ownership of a game.

use crate::error::RunnerError;
use crate::game::GameHandle;

/// A framework runner that, once handed a game, owns its lifecycle and
/// render loop.
///
/// Any framework backend (a windowed event loop, a headless driver, a test
/// double) can implement this trait to be compatible with the launch path.
///
/// # Contract
///
/// On `Ok`, ownership of the handle has transferred to the runner, and the
/// runner is responsible for driving every [`Game`](crate::game::Game)
/// callback from this point forward. Handing a second game to a runner that
/// already owns one is a runner-side error, not something the launch path
/// guards against.
pub trait Runner {
    /// Takes ownership of `game` and starts driving its lifecycle.
    ///
    /// # Errors
    /// Returns [`RunnerError::AlreadyInitialized`] if the runner already
    /// owns a game, or [`RunnerError::Backend`] if the underlying framework
    /// failed to start.
    fn initialize(&mut self, game: GameHandle) -> Result<(), RunnerError>;
}
