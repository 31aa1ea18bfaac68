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

//! The launch sequence: require, resolve, capability-check, hand over.

use crate::config::LaunchManifest;
use crate::registry::ModuleRegistry;
use gantry_core::{LaunchError, Runner};

/// Runs the launch sequence against `registry`, handing the resolved game
/// to `runner`.
///
/// The steps run in order, and the first failure wins:
/// 1. load (require) the manifest's module,
/// 2. resolve the manifest's global and dereference it,
/// 3. check the value against the game lifecycle contract,
/// 4. initialize the runner with the handle, transferring ownership.
///
/// On success the launch path retains no reference to the game.
///
/// # Errors
/// One [`LaunchError`] kind per step; see the error type for the taxonomy.
pub fn bootstrap(
    registry: &mut ModuleRegistry,
    manifest: &LaunchManifest,
    runner: &mut dyn Runner,
) -> Result<(), LaunchError> {
    log::info!(
        "Launching '{}/{}'...",
        manifest.module,
        manifest.symbol
    );

    registry.load(&manifest.module)?;

    let binding = registry.resolve(&manifest.module, &manifest.symbol)?;
    let value = binding.deref();

    let game = value
        .into_game()
        .map_err(|value| LaunchError::CapabilityMismatch {
            module: manifest.module.clone(),
            symbol: manifest.symbol.clone(),
            found: value.type_name().to_string(),
        })?;

    runner.initialize(game)?;

    log::info!(
        "Launch complete: '{}/{}' handed to the runner",
        manifest.module,
        manifest.symbol
    );
    Ok(())
}
