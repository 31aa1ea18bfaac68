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

//! The host application framework boundary.

/// The opaque saved-state token the host delivers with its
/// application-created event.
///
/// The launch path forwards it unmodified to the host's inherited startup
/// behavior and never inspects the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState(Option<Vec<u8>>);

impl SavedState {
    /// A token with no payload (a cold start).
    #[must_use]
    pub fn empty() -> Self {
        Self(None)
    }

    /// A token carrying an opaque payload from a previous incarnation.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(Some(bytes))
    }

    /// The payload, if the host delivered one.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.0.as_deref()
    }
}

/// The inherited host-framework startup behavior.
///
/// Implementations perform whatever boilerplate the host platform requires
/// when the application is created. Startup is assumed to succeed; it is
/// not guarded by the launch path.
pub trait Host {
    /// Runs the host's own startup with the forwarded saved-state token.
    fn startup(&mut self, saved_state: &SavedState);
}

/// A host with no startup work of its own.
#[derive(Debug, Default)]
pub struct DefaultHost;

impl Host for DefaultHost {
    fn startup(&mut self, saved_state: &SavedState) {
        log::debug!(
            "Host startup (saved state: {})",
            if saved_state.bytes().is_some() {
                "present"
            } else {
                "none"
            }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_state_round_trips_its_payload() {
        let state = SavedState::from_bytes(vec![1, 2, 3]);
        assert_eq!(state.bytes(), Some(&[1u8, 2, 3][..]));
    }

    #[test]
    fn empty_saved_state_has_no_payload() {
        assert_eq!(SavedState::empty().bytes(), None);
        assert_eq!(SavedState::default(), SavedState::empty());
    }
}
