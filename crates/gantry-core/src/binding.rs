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

//! Named globals as constructor closures producing opaque values.
//!
//! A [`Binding`] is what a module binds a symbol to: a factory that, when
//! dereferenced, produces the current value as an [`OpaqueValue`]. Keeping
//! the factory rather than the value preserves late binding (the value is
//! constructed at resolution time, not at bind time) and lets ownership of
//! the produced value transfer cleanly to whoever dereferenced it.

use crate::game::GameHandle;
use std::any::{type_name, Any};
use std::fmt;

type Factory = Box<dyn Fn() -> Box<dyn Any + Send> + Send + Sync>;

/// A named global's backing: a constructor closure plus the registered
/// type's name for diagnostics.
pub struct Binding {
    type_name: &'static str,
    factory: Factory,
}

impl Binding {
    /// Creates a binding whose value is produced by `factory`.
    pub fn new<T, F>(factory: F) -> Self
    where
        T: Any + Send,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self {
            type_name: type_name::<T>(),
            factory: Box::new(move || Box::new(factory()) as Box<dyn Any + Send>),
        }
    }

    /// Creates a binding that produces a game handle.
    ///
    /// Values bound this way satisfy the capability check performed by
    /// [`OpaqueValue::into_game`].
    pub fn game<F>(factory: F) -> Self
    where
        F: Fn() -> GameHandle + Send + Sync + 'static,
    {
        Self::new(factory)
    }

    /// Dereferences the binding, producing its current value.
    ///
    /// Each call runs the factory; the caller owns the result.
    #[must_use]
    pub fn deref(&self) -> OpaqueValue {
        OpaqueValue {
            type_name: self.type_name,
            value: (self.factory)(),
        }
    }

    /// The name of the type this binding produces.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("type_name", &self.type_name)
            .finish()
    }
}

/// An owned value of erased type, as produced by dereferencing a
/// [`Binding`].
pub struct OpaqueValue {
    type_name: &'static str,
    value: Box<dyn Any + Send>,
}

impl OpaqueValue {
    /// The name of the value's registered type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Attempts to recover the value as a concrete type.
    ///
    /// # Errors
    /// Returns `self` unchanged if the value is not a `T`.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_name = self.type_name;
        match self.value.downcast::<T>() {
            Ok(boxed) => Ok(*boxed),
            Err(value) => Err(Self { type_name, value }),
        }
    }

    /// The capability check: attempts to treat the value as a game.
    ///
    /// # Errors
    /// Returns `self` unchanged if the value does not satisfy the game
    /// lifecycle contract.
    pub fn into_game(self) -> Result<GameHandle, Self> {
        self.downcast::<GameHandle>()
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueValue")
            .field("type_name", &self.type_name)
            .finish()
    }
}
