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

//! The launch manifest: which global to launch, by name.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Names the module and global the launch sequence resolves.
///
/// The manifest is what makes game selection late-bound: the same binary
/// can launch a different game by shipping a different manifest, without
/// recompiling the launch path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchManifest {
    /// The symbolic name of the module to require.
    pub module: String,
    /// The name of the global inside that module expected to hold the game.
    pub symbol: String,
}

impl Default for LaunchManifest {
    fn default() -> Self {
        Self {
            module: "gantry.blank".to_string(),
            symbol: "game".to_string(),
        }
    }
}

impl LaunchManifest {
    /// Creates a manifest naming `module`/`symbol`.
    pub fn new(module: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            symbol: symbol.into(),
        }
    }

    /// Parses a manifest from JSON text.
    ///
    /// # Errors
    /// Returns [`ManifestError::Decode`] if the text is not a valid
    /// manifest.
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        serde_json::from_str(text).map_err(|source| ManifestError::Decode { path: None, source })
    }

    /// Reads and parses a manifest file.
    ///
    /// # Errors
    /// Returns [`ManifestError::Io`] if the file cannot be read, or
    /// [`ManifestError::Decode`] if its contents are not a valid manifest.
    pub fn from_path(path: &Path) -> Result<Self, ManifestError> {
        let text = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ManifestError::Decode {
            path: Some(path.to_path_buf()),
            source,
        })
    }
}

/// An error reading or decoding a launch manifest.
#[derive(Debug)]
pub enum ManifestError {
    /// The manifest file could not be read.
    Io {
        /// The path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The manifest contents are not valid JSON for a manifest.
    Decode {
        /// The path that failed to decode, if the manifest came from a file.
        path: Option<PathBuf>,
        /// The underlying decode error.
        source: serde_json::Error,
    },
}

impl fmt::Display for ManifestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManifestError::Io { path, source } => {
                write!(f, "Failed to read manifest '{}': {source}", path.display())
            }
            ManifestError::Decode {
                path: Some(path),
                source,
            } => {
                write!(
                    f,
                    "Failed to decode manifest '{}': {source}",
                    path.display()
                )
            }
            ManifestError::Decode { path: None, source } => {
                write!(f, "Failed to decode manifest: {source}")
            }
        }
    }
}

impl std::error::Error for ManifestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ManifestError::Io { source, .. } => Some(source),
            ManifestError::Decode { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_manifest() {
        let manifest =
            LaunchManifest::from_json(r#"{"module": "app.core", "symbol": "game-instance"}"#)
                .unwrap();
        assert_eq!(manifest.module, "app.core");
        assert_eq!(manifest.symbol, "game-instance");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let manifest = LaunchManifest::from_json(r#"{"module": "app.core"}"#).unwrap();
        assert_eq!(manifest.module, "app.core");
        assert_eq!(manifest.symbol, LaunchManifest::default().symbol);
    }

    #[test]
    fn invalid_json_is_a_decode_error() {
        let err = LaunchManifest::from_json("{not json").unwrap_err();
        assert!(matches!(err, ManifestError::Decode { path: None, .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = LaunchManifest::from_path(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }

    #[test]
    fn round_trips_through_json() {
        let manifest = LaunchManifest::new("sandbox.core", "game");
        let text = serde_json::to_string(&manifest).unwrap();
        assert_eq!(LaunchManifest::from_json(&text).unwrap(), manifest);
    }
}
