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

//! # Gantry Core
//!
//! Foundational crate containing the lifecycle traits, core types, and
//! interface contracts that define the launch architecture.

#![warn(missing_docs)]

pub mod binding;
pub mod error;
pub mod game;
pub mod host;
pub mod runner;
pub mod state;

pub use binding::{Binding, OpaqueValue};
pub use error::{LaunchError, RunnerError};
pub use game::{Game, GameHandle};
pub use host::{DefaultHost, Host, SavedState};
pub use runner::Runner;
pub use state::LaunchState;
