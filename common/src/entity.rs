//
// Copyright 2025-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Entity handles

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

/// World-space position of an entity
pub type Position = glam::DVec3;

/// Shared handle to an entity in the simulated world.
///
/// Two handles refer to the same entity when they point at the same allocation,
/// see [`Entity::same`].
pub type EntityRef = Arc<Entity>;

/// Stable identifier of an entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub Uuid);

impl EntityId {
    /// Create a new random entity identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An entity as seen by the agent.
///
/// The world layer owns the position and may move the entity at any time, so
/// readers always observe the latest value.
pub struct Entity {
    id: EntityId,
    name: String,
    position: RwLock<Position>,
}

impl Entity {
    /// Create a new entity at the given position
    pub fn new(name: impl Into<String>, position: Position) -> Self {
        Self::with_id(EntityId::new(), name, position)
    }

    /// Create an entity with a known identifier
    pub fn with_id(id: EntityId, name: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            name: name.into(),
            position: RwLock::new(position),
        }
    }

    /// Create a new shared entity handle
    pub fn spawn(name: impl Into<String>, position: Position) -> EntityRef {
        Arc::new(Self::new(name, position))
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Current position
    pub fn position(&self) -> Position {
        *self.position.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Move the entity
    pub fn set_position(&self, position: Position) {
        *self.position.write().unwrap_or_else(PoisonError::into_inner) = position;
    }

    /// Euclidean distance between the current positions of two entities
    pub fn distance_to(&self, other: &Entity) -> f64 {
        self.position().distance(other.position())
    }

    /// Returns true if both handles refer to the same entity instance
    pub fn same(a: &EntityRef, b: &EntityRef) -> bool {
        Arc::ptr_eq(a, b)
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("position", &self.position())
            .finish()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
