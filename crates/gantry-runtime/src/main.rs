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

//! Generic launch binary.
//!
//! Reads a launch manifest (path as the first argument, defaults
//! otherwise), installs the packaged modules, and boots through the
//! launcher. A failed launch is surfaced as a non-zero exit, unlike an
//! embedded host where the failure would be swallowed.

mod modules;

use anyhow::{bail, Context, Result};
use gantry_core::{DefaultHost, LaunchState, SavedState};
use gantry_launch::{LaunchManifest, Launcher, ModuleRegistry};
use std::path::Path;

const FRAME_BUDGET: u32 = 120;

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let manifest = match std::env::args().nth(1) {
        Some(path) => LaunchManifest::from_path(Path::new(&path))
            .with_context(|| format!("loading launch manifest '{path}'"))?,
        None => LaunchManifest::default(),
    };
    log::info!(
        "gantry-runtime: manifest points at '{}/{}'",
        manifest.module,
        manifest.symbol
    );

    let mut registry = ModuleRegistry::new();
    modules::install_packaged(&mut registry);

    let runner = gantry_launch::HeadlessRunner::new(FRAME_BUDGET);
    let mut launcher = Launcher::new(DefaultHost, registry, manifest, runner);
    launcher.on_create(&SavedState::empty());

    match launcher.state() {
        LaunchState::Initialized => {
            log::info!(
                "gantry-runtime: exited cleanly after {} frames",
                launcher.runner().frames_rendered()
            );
            Ok(())
        }
        LaunchState::Failed => match launcher.failure() {
            Some(err) => bail!("launch failed: {err}"),
            None => bail!("launch failed"),
        },
        LaunchState::Uninitialized => bail!("launch never ran"),
    }
}
