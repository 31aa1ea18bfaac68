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

use gantry_core::{
    DefaultHost, Game, GameHandle, LaunchError, LaunchState, Runner, RunnerError, SavedState,
};
use gantry_launch::{bootstrap, LaunchManifest, Launcher, ModuleRegistry};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- TEST DOUBLES ---

/// A game that reports whether its lifecycle ran.
struct ProbeGame {
    created: Arc<AtomicU32>,
}

impl Game for ProbeGame {
    fn create(&mut self) {
        self.created.fetch_add(1, Ordering::SeqCst);
    }
    fn render(&mut self, _dt: f32) {}
    fn resize(&mut self, _width: u32, _height: u32) {}
    fn dispose(&mut self) {}
}

/// A runner that counts hand-overs without driving the game.
struct CountingRunner {
    initializations: Arc<AtomicU32>,
    fail_with: Option<fn() -> RunnerError>,
}

impl CountingRunner {
    fn new(initializations: Arc<AtomicU32>) -> Self {
        Self {
            initializations,
            fail_with: None,
        }
    }

    fn failing(initializations: Arc<AtomicU32>, fail_with: fn() -> RunnerError) -> Self {
        Self {
            initializations,
            fail_with: Some(fail_with),
        }
    }
}

impl Runner for CountingRunner {
    fn initialize(&mut self, _game: GameHandle) -> Result<(), RunnerError> {
        if let Some(fail) = self.fail_with {
            return Err(fail());
        }
        self.initializations.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

fn registry_with_game(created: Arc<AtomicU32>) -> ModuleRegistry {
    let mut registry = ModuleRegistry::new();
    registry.install("app.core", move |scope| {
        let created = created.clone();
        scope.bind_game("game-instance", move || {
            Box::new(ProbeGame {
                created: created.clone(),
            })
        });
        Ok(())
    });
    registry
}

// --- THE HAPPY PATH ---

#[test]
fn successful_launch_initializes_the_runner_exactly_once() {
    // ARRANGE: a module whose named global is bound to a conforming game.
    let created = Arc::new(AtomicU32::new(0));
    let initializations = Arc::new(AtomicU32::new(0));
    let registry = registry_with_game(created.clone());
    let manifest = LaunchManifest::new("app.core", "game-instance");

    // ACT: fire the application-created event.
    let mut launcher = Launcher::new(
        DefaultHost,
        registry,
        manifest,
        CountingRunner::new(initializations.clone()),
    );
    launcher.on_create(&SavedState::empty());

    // ASSERT: the runner received the game exactly once, nothing failed.
    assert_eq!(launcher.state(), LaunchState::Initialized);
    assert!(launcher.failure().is_none());
    assert_eq!(initializations.load(Ordering::SeqCst), 1);
}

// --- FAILURE SWALLOWING, ONE CASE PER TAXONOMY KIND ---

#[test]
fn module_load_failure_is_swallowed_and_recorded() {
    let initializations = Arc::new(AtomicU32::new(0));
    let mut registry = ModuleRegistry::new();
    registry.install("app.core", |_scope| Err("boot script raised".into()));

    let mut launcher = Launcher::new(
        DefaultHost,
        registry,
        LaunchManifest::new("app.core", "game-instance"),
        CountingRunner::new(initializations.clone()),
    );
    // Returns normally; the failure must not reach the host.
    launcher.on_create(&SavedState::empty());

    assert_eq!(launcher.state(), LaunchState::Failed);
    assert!(matches!(
        launcher.failure(),
        Some(LaunchError::ModuleLoad { .. })
    ));
    assert_eq!(initializations.load(Ordering::SeqCst), 0);
}

#[test]
fn missing_module_is_swallowed_and_recorded() {
    let initializations = Arc::new(AtomicU32::new(0));

    let mut launcher = Launcher::new(
        DefaultHost,
        ModuleRegistry::new(),
        LaunchManifest::new("app.core", "game-instance"),
        CountingRunner::new(initializations.clone()),
    );
    launcher.on_create(&SavedState::empty());

    assert_eq!(launcher.state(), LaunchState::Failed);
    assert!(matches!(
        launcher.failure(),
        Some(LaunchError::ModuleLoad { .. })
    ));
    assert_eq!(initializations.load(Ordering::SeqCst), 0);
}

#[test]
fn unbound_symbol_is_swallowed_and_recorded() {
    let created = Arc::new(AtomicU32::new(0));
    let initializations = Arc::new(AtomicU32::new(0));

    let mut launcher = Launcher::new(
        DefaultHost,
        registry_with_game(created),
        LaunchManifest::new("app.core", "no-such-global"),
        CountingRunner::new(initializations.clone()),
    );
    launcher.on_create(&SavedState::empty());

    assert_eq!(launcher.state(), LaunchState::Failed);
    assert!(matches!(
        launcher.failure(),
        Some(LaunchError::UnboundSymbol { .. })
    ));
    assert_eq!(initializations.load(Ordering::SeqCst), 0);
}

#[test]
fn non_game_value_fails_the_capability_check() {
    let initializations = Arc::new(AtomicU32::new(0));
    let mut registry = ModuleRegistry::new();
    registry.install("app.core", |scope| {
        scope.bind("game-instance", || "not a game".to_string());
        Ok(())
    });

    let mut launcher = Launcher::new(
        DefaultHost,
        registry,
        LaunchManifest::new("app.core", "game-instance"),
        CountingRunner::new(initializations.clone()),
    );
    launcher.on_create(&SavedState::empty());

    assert_eq!(launcher.state(), LaunchState::Failed);
    assert!(matches!(
        launcher.failure(),
        Some(LaunchError::CapabilityMismatch { .. })
    ));
    assert_eq!(initializations.load(Ordering::SeqCst), 0);
}

#[test]
fn runner_rejection_is_swallowed_and_recorded() {
    let created = Arc::new(AtomicU32::new(0));
    let initializations = Arc::new(AtomicU32::new(0));

    let mut launcher = Launcher::new(
        DefaultHost,
        registry_with_game(created),
        LaunchManifest::new("app.core", "game-instance"),
        CountingRunner::failing(initializations.clone(), || {
            RunnerError::Backend("no display".to_string())
        }),
    );
    launcher.on_create(&SavedState::empty());

    assert_eq!(launcher.state(), LaunchState::Failed);
    assert!(matches!(
        launcher.failure(),
        Some(LaunchError::Initialization(_))
    ));
    assert_eq!(initializations.load(Ordering::SeqCst), 0);
}

// --- THE STRICT FORM ---

#[test]
fn bootstrap_reports_each_failure_kind_as_a_result() {
    let initializations = Arc::new(AtomicU32::new(0));
    let mut runner = CountingRunner::new(initializations.clone());

    // Unknown module.
    let mut registry = ModuleRegistry::new();
    let manifest = LaunchManifest::new("app.core", "game-instance");
    let err = bootstrap(&mut registry, &manifest, &mut runner).unwrap_err();
    assert!(matches!(err, LaunchError::ModuleLoad { .. }));

    // Unbound symbol.
    let created = Arc::new(AtomicU32::new(0));
    let mut registry = registry_with_game(created.clone());
    let manifest = LaunchManifest::new("app.core", "missing");
    let err = bootstrap(&mut registry, &manifest, &mut runner).unwrap_err();
    assert!(matches!(err, LaunchError::UnboundSymbol { .. }));

    // Success, on the same registry.
    let manifest = LaunchManifest::new("app.core", "game-instance");
    bootstrap(&mut registry, &manifest, &mut runner).unwrap();
    assert_eq!(initializations.load(Ordering::SeqCst), 1);
}

#[test]
fn bootstrap_through_a_headless_runner_drives_the_game() {
    let created = Arc::new(AtomicU32::new(0));
    let mut registry = registry_with_game(created.clone());
    let manifest = LaunchManifest::new("app.core", "game-instance");
    let mut runner = gantry_launch::HeadlessRunner::new(3);

    bootstrap(&mut registry, &manifest, &mut runner).unwrap();

    assert_eq!(created.load(Ordering::SeqCst), 1);
    assert_eq!(runner.frames_rendered(), 3);
}
