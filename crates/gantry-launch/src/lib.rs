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

//! The lifecycle adapter for launching games.
//!
//! This crate bridges three boundaries: the host application framework
//! (which fires a single application-created event), a registry of named
//! modules binding named globals (the late-binding source of the game),
//! and a framework runner (which takes ownership of the resolved game and
//! drives its lifecycle from then on).
//!
//! The typical flow is: install modules into a [`ModuleRegistry`], describe
//! which global to launch in a [`LaunchManifest`], and hand both to a
//! [`Launcher`] together with a [`Runner`](gantry_core::Runner). The
//! launcher's [`on_create`](Launcher::on_create) performs the whole
//! sequence when the host says the application exists.

pub mod bootstrap;
pub mod config;
pub mod headless;
pub mod launcher;
pub mod registry;

pub use bootstrap::bootstrap;
pub use config::{LaunchManifest, ManifestError};
pub use headless::HeadlessRunner;
pub use launcher::Launcher;
pub use registry::{ModuleRegistry, ModuleScope};

pub mod prelude {
    //! One-stop imports for launching a game.
    pub use crate::config::LaunchManifest;
    pub use crate::headless::HeadlessRunner;
    pub use crate::launcher::Launcher;
    pub use crate::registry::{ModuleRegistry, ModuleScope};
    pub use gantry_core::{
        DefaultHost, Game, GameHandle, Host, LaunchError, LaunchState, Runner, RunnerError,
        SavedState,
    };
}
