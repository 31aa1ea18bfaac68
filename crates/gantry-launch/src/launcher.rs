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

//! The host-facing adapter around the launch sequence.

use crate::bootstrap::bootstrap;
use crate::config::LaunchManifest;
use crate::registry::ModuleRegistry;
use gantry_core::{Host, LaunchError, LaunchState, Runner, SavedState};

/// Adapts the host's application-created event to the launch sequence.
///
/// The launcher owns everything the sequence needs: the host's inherited
/// startup behavior, the module registry, the manifest naming the game,
/// and the runner that will take ownership of it. The host fires
/// [`on_create`](Launcher::on_create) once; the launcher does the rest.
///
/// A launch failure is reported through the `log` facade and recorded, but
/// never propagated to the host: `on_create` always returns normally, and
/// the host continues in whatever state its own lifecycle dictates. Callers
/// that want to escalate instead can inspect [`state`](Launcher::state) and
/// [`failure`](Launcher::failure) after the fact, or run
/// [`bootstrap()`] directly.
pub struct Launcher<H: Host, R: Runner> {
    host: H,
    registry: ModuleRegistry,
    manifest: LaunchManifest,
    runner: R,
    state: LaunchState,
    failure: Option<LaunchError>,
}

impl<H: Host, R: Runner> Launcher<H, R> {
    /// Creates a launcher ready for the host's startup event.
    pub fn new(host: H, registry: ModuleRegistry, manifest: LaunchManifest, runner: R) -> Self {
        Self {
            host,
            registry,
            manifest,
            runner,
            state: LaunchState::Uninitialized,
            failure: None,
        }
    }

    /// The application-created entry point.
    ///
    /// Forwards `saved_state` to the host's inherited startup behavior,
    /// then runs the launch sequence. Exactly one diagnostic is emitted if
    /// the sequence fails; the failure is swallowed either way.
    ///
    /// The transition out of [`LaunchState::Uninitialized`] is one-way:
    /// replaying this entry point afterwards is a warn-logged no-op, since
    /// re-creation semantics belong to the host framework.
    pub fn on_create(&mut self, saved_state: &SavedState) {
        if self.state.is_settled() {
            log::warn!("on_create replayed after launch already settled, ignoring");
            return;
        }

        self.host.startup(saved_state);

        match bootstrap(&mut self.registry, &self.manifest, &mut self.runner) {
            Ok(()) => {
                self.state = LaunchState::Initialized;
            }
            Err(err) => {
                log::error!("Game launch failed: {}", render_chain(&err));
                self.state = LaunchState::Failed;
                self.failure = Some(err);
            }
        }
    }

    /// Where the launch stands.
    #[must_use]
    pub fn state(&self) -> LaunchState {
        self.state
    }

    /// The recorded failure, if the launch failed.
    #[must_use]
    pub fn failure(&self) -> Option<&LaunchError> {
        self.failure.as_ref()
    }

    /// The runner, for inspection after launch.
    #[must_use]
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Consumes the launcher, returning the runner.
    #[must_use]
    pub fn into_runner(self) -> R {
        self.runner
    }
}

/// Flattens an error and its sources into one diagnostic line.
fn render_chain(err: &dyn std::error::Error) -> String {
    let mut rendered = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
