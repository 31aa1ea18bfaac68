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

//! A registry of named modules binding named globals.
//!
//! The [`ModuleRegistry`] is the explicit, compile-time-checked stand-in
//! for a dynamic-language runtime's module system: modules are installed
//! under a symbolic name, loaded on demand ("require" semantics, at most
//! once), and expose globals bound to constructor closures.
//!
//! # Example
//!
//! ```rust
//! use gantry_launch::registry::ModuleRegistry;
//!
//! let mut registry = ModuleRegistry::new();
//! registry.install("app.core", |scope| {
//!     scope.bind("answer", || 42u32);
//!     Ok(())
//! });
//!
//! registry.load("app.core").unwrap();
//! let binding = registry.resolve("app.core", "answer").unwrap();
//! assert_eq!(binding.deref().downcast::<u32>().unwrap(), 42);
//! ```

use gantry_core::{Binding, GameHandle, LaunchError};
use std::any::Any;
use std::collections::HashMap;

/// The error type a module loader may return.
pub type LoaderError = Box<dyn std::error::Error + Send + Sync>;

type Loader = Box<dyn FnOnce(&mut ModuleScope<'_>) -> Result<(), LoaderError> + Send>;

/// The surface a module loader sees while it runs: a namespace to bind
/// globals into.
pub struct ModuleScope<'a> {
    module: &'a str,
    globals: &'a mut HashMap<String, Binding>,
}

impl ModuleScope<'_> {
    /// Binds `symbol` to a constructor closure producing any value.
    pub fn bind<T, F>(&mut self, symbol: &str, factory: F)
    where
        T: Any + Send,
        F: Fn() -> T + Send + Sync + 'static,
    {
        log::debug!("Module '{}': bound global '{}'", self.module, symbol);
        self.globals
            .insert(symbol.to_string(), Binding::new(factory));
    }

    /// Binds `symbol` to a constructor closure producing a game handle.
    ///
    /// This is the conventional binding for the global a launch manifest
    /// points at.
    pub fn bind_game<F>(&mut self, symbol: &str, factory: F)
    where
        F: Fn() -> GameHandle + Send + Sync + 'static,
    {
        log::debug!("Module '{}': bound game global '{}'", self.module, symbol);
        self.globals
            .insert(symbol.to_string(), Binding::game(factory));
    }
}

/// The life of an installed module.
enum ModuleState {
    /// Installed but never loaded; holds the loader to run.
    Installed(Loader),
    /// Loaded; its globals are resolvable.
    Loaded,
    /// Its loader ran and failed; the failure message is kept for
    /// subsequent load attempts.
    Failed(String),
}

struct Module {
    state: ModuleState,
    globals: HashMap<String, Binding>,
}

/// A registry of modules, keyed by symbolic name.
///
/// Loading is idempotent: a module's loader runs exactly once, and loading
/// an already-loaded module is a no-op. A loader that fails leaves the
/// module unloaded; every later load reports the same failure.
#[derive(Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, Module>,
}

impl ModuleRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Installs a module under `name`.
    ///
    /// The loader runs when the module is first loaded and binds the
    /// module's globals. Installing over an existing name replaces it,
    /// loaded or not.
    pub fn install<F>(&mut self, name: &str, loader: F)
    where
        F: FnOnce(&mut ModuleScope<'_>) -> Result<(), LoaderError> + Send + 'static,
    {
        log::info!("ModuleRegistry: installed module '{name}'");
        self.modules.insert(
            name.to_string(),
            Module {
                state: ModuleState::Installed(Box::new(loader)),
                globals: HashMap::new(),
            },
        );
    }

    /// Loads the named module, running its loader if it has not run yet.
    ///
    /// # Errors
    /// Returns [`LaunchError::ModuleLoad`] if no module of that name is
    /// installed, or if its loader failed (now or on a previous attempt).
    pub fn load(&mut self, name: &str) -> Result<(), LaunchError> {
        let module = self.modules.get_mut(name).ok_or_else(|| {
            LaunchError::ModuleLoad {
                module: name.to_string(),
                details: "module is not installed".to_string(),
            }
        })?;

        match &module.state {
            ModuleState::Loaded => {
                log::trace!("Module '{name}' already loaded, skipping");
                return Ok(());
            }
            ModuleState::Failed(details) => {
                return Err(LaunchError::ModuleLoad {
                    module: name.to_string(),
                    details: details.clone(),
                });
            }
            ModuleState::Installed(_) => {}
        }

        // Take the loader out so it can only ever run once.
        let loader = match std::mem::replace(&mut module.state, ModuleState::Loaded) {
            ModuleState::Installed(loader) => loader,
            _ => unreachable!("state checked above"),
        };

        let mut scope = ModuleScope {
            module: name,
            globals: &mut module.globals,
        };
        match loader(&mut scope) {
            Ok(()) => {
                log::info!(
                    "ModuleRegistry: loaded module '{}' ({} globals)",
                    name,
                    module.globals.len()
                );
                Ok(())
            }
            Err(err) => {
                let details = err.to_string();
                module.globals.clear();
                module.state = ModuleState::Failed(details.clone());
                Err(LaunchError::ModuleLoad {
                    module: name.to_string(),
                    details,
                })
            }
        }
    }

    /// Looks up a namespaced global in a loaded module.
    ///
    /// # Errors
    /// Returns [`LaunchError::UnboundSymbol`] if the module is unknown, not
    /// loaded, or loaded without binding `symbol`.
    pub fn resolve(&self, module: &str, symbol: &str) -> Result<&Binding, LaunchError> {
        self.modules
            .get(module)
            .filter(|m| matches!(m.state, ModuleState::Loaded))
            .and_then(|m| m.globals.get(symbol))
            .ok_or_else(|| LaunchError::UnboundSymbol {
                module: module.to_string(),
                symbol: symbol.to_string(),
            })
    }

    /// Returns `true` if the named module has been loaded successfully.
    #[must_use]
    pub fn is_loaded(&self, name: &str) -> bool {
        matches!(
            self.modules.get(name),
            Some(Module {
                state: ModuleState::Loaded,
                ..
            })
        )
    }

    /// Returns the number of installed modules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns `true` if no modules are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}
