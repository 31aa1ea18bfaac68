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

//! Defines the hierarchy of error types for the launch path.

use std::fmt;

/// An error raised by a runner when it is handed a game.
#[derive(Debug)]
pub enum RunnerError {
    /// The runner already owns a game; initialization is one-shot.
    AlreadyInitialized,
    /// The underlying framework backend failed to start.
    Backend(String),
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::AlreadyInitialized => {
                write!(f, "The runner already owns a game.")
            }
            RunnerError::Backend(msg) => {
                write!(f, "Framework backend failed to start: {msg}")
            }
        }
    }
}

impl std::error::Error for RunnerError {}

/// A failure in the launch sequence, by kind.
///
/// Each variant corresponds to one step of the sequence: loading the named
/// module, resolving the named global, checking the value against the game
/// lifecycle contract, and handing it to the runner. The first failure wins;
/// later steps are not attempted.
#[derive(Debug)]
pub enum LaunchError {
    /// The named module could not be loaded.
    ModuleLoad {
        /// The symbolic name of the module.
        module: String,
        /// What went wrong while loading it.
        details: String,
    },
    /// The module loaded, but the named global is not bound in it.
    UnboundSymbol {
        /// The symbolic name of the module.
        module: String,
        /// The name of the global that was looked up.
        symbol: String,
    },
    /// The resolved value does not satisfy the game lifecycle contract.
    CapabilityMismatch {
        /// The symbolic name of the module.
        module: String,
        /// The name of the global that was resolved.
        symbol: String,
        /// The name of the type that was found instead.
        found: String,
    },
    /// The runner rejected the game.
    Initialization(RunnerError),
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::ModuleLoad { module, details } => {
                write!(f, "Failed to load module '{module}': {details}")
            }
            LaunchError::UnboundSymbol { module, symbol } => {
                write!(f, "No global '{symbol}' is bound in module '{module}'")
            }
            LaunchError::CapabilityMismatch {
                module,
                symbol,
                found,
            } => {
                write!(
                    f,
                    "Global '{module}/{symbol}' does not satisfy the game lifecycle contract (found {found})"
                )
            }
            LaunchError::Initialization(err) => {
                write!(f, "Framework initialization failed: {err}")
            }
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::Initialization(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RunnerError> for LaunchError {
    fn from(err: RunnerError) -> Self {
        LaunchError::Initialization(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn module_load_display() {
        let err = LaunchError::ModuleLoad {
            module: "app.core".to_string(),
            details: "module is not installed".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Failed to load module 'app.core': module is not installed"
        );
    }

    #[test]
    fn unbound_symbol_display() {
        let err = LaunchError::UnboundSymbol {
            module: "app.core".to_string(),
            symbol: "game-instance".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "No global 'game-instance' is bound in module 'app.core'"
        );
    }

    #[test]
    fn capability_mismatch_display() {
        let err = LaunchError::CapabilityMismatch {
            module: "app.core".to_string(),
            symbol: "game-instance".to_string(),
            found: "alloc::string::String".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Global 'app.core/game-instance' does not satisfy the game lifecycle contract (found alloc::string::String)"
        );
    }

    #[test]
    fn launch_error_wraps_runner_error_as_source() {
        let err: LaunchError = RunnerError::AlreadyInitialized.into();
        assert_eq!(
            format!("{err}"),
            "Framework initialization failed: The runner already owns a game."
        );
        assert!(err.source().is_some());
    }
}
