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

//! Shared targets registry
//!
//! Behaviors that act on "the current target" do not own it. Target selection
//! logic writes into a [`TargetsRegistry`] and every behavior holding a clone of
//! the registry observes the same value. Writers are not coordinated beyond
//! call order, so the last write wins.

use crate::entity::{Entity, EntityRef};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Values held by the registry
#[derive(Debug, Clone, Default)]
pub struct Targets {
    /// Entity currently designated for engagement
    pub entity: Option<EntityRef>,
}

/// Cloneable handle to a shared [`Targets`] record
#[derive(Debug, Clone, Default)]
pub struct TargetsRegistry {
    inner: Arc<RwLock<Targets>>,
}

impl TargetsRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry already pointing at an entity
    pub fn with_entity(entity: EntityRef) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Targets {
                entity: Some(entity),
            })),
        }
    }

    /// Current target entity, if any
    pub fn entity(&self) -> Option<EntityRef> {
        self.read().entity.clone()
    }

    /// Replace the current target entity
    pub fn set_entity(&self, entity: EntityRef) {
        tracing::trace!("Target entity set to {}", entity);
        self.write().entity = Some(entity);
    }

    /// Remove the current target entity
    pub fn clear_entity(&self) {
        tracing::trace!("Target entity cleared");
        self.write().entity = None;
    }

    /// Returns true if the registry currently holds this exact entity handle
    pub fn holds(&self, entity: &EntityRef) -> bool {
        self.read()
            .entity
            .as_ref()
            .is_some_and(|current| Entity::same(current, entity))
    }

    fn read(&self) -> RwLockReadGuard<'_, Targets> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Targets> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Position;

    #[test]
    fn test_registry_starts_empty() {
        let registry = TargetsRegistry::new();
        assert!(registry.entity().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let registry = TargetsRegistry::new();
        let observer = registry.clone();
        let zombie = Entity::spawn("Zombie", Position::ZERO);

        registry.set_entity(zombie.clone());
        assert!(observer.holds(&zombie));

        observer.clear_entity();
        assert!(registry.entity().is_none());
    }

    #[test]
    fn test_last_writer_wins() {
        let registry = TargetsRegistry::new();
        let first = Entity::spawn("Zombie", Position::ZERO);
        let second = Entity::spawn("Skeleton", Position::X);

        registry.set_entity(first.clone());
        registry.set_entity(second.clone());

        assert!(!registry.holds(&first));
        assert!(registry.holds(&second));
        assert_eq!(registry.entity().map(|e| e.id()), Some(second.id()));
    }

    #[test]
    fn test_holds_compares_identity() {
        let zombie = Entity::spawn("Zombie", Position::ZERO);
        let twin = std::sync::Arc::new(Entity::with_id(zombie.id(), "Zombie", Position::ZERO));
        let registry = TargetsRegistry::with_entity(zombie);

        assert!(!registry.holds(&twin));
    }
}
