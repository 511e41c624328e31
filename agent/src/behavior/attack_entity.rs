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

//! Attack-entity behavior
//!
//! While this behavior is the current state the combat engine is kept pointed at
//! the entity held by the shared [`TargetsRegistry`]. Changing the target through
//! [`AttackEntityBehavior::set_attack_target`] redirects a live attack
//! immediately. Changing it by writing the registry directly only takes effect on
//! the next entry or [`AttackEntityBehavior::restart`].

use super::{Activity, StateBehavior};
use crate::combat::{CombatCommand, CombatEngine, dispatch};
use crate::config::BehaviorSettings;
use serde::{Deserialize, Serialize};
use skirmish_common::{EntityRef, TargetsRegistry};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Which configured distance is handed to the combat engine as its attack range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackRangeMode {
    /// Attack range mirrors `follow_distance`; `attack_distance` is not sent.
    #[default]
    FollowDistance,
    /// Attack range is `attack_distance`.
    AttackDistance,
}

/// Pursues and attacks the entity designated in the targets registry.
///
/// Combat commands are fire-and-forget: each one is spawned on the runtime
/// captured at construction and its outcome is discarded. The lifecycle hooks
/// may be invoked from any thread.
pub struct AttackEntityBehavior {
    agent: EntityRef,
    combat: Arc<dyn CombatEngine>,
    targets: TargetsRegistry,
    runtime: Handle,
    activity: Activity,

    /// How close to the entity the agent attempts to get
    pub follow_distance: f64,

    /// How close to the entity the agent should be before attacking
    pub attack_distance: f64,

    /// Which of the two distances is sent to the combat engine as its attack range
    pub attack_range_mode: AttackRangeMode,
}

impl AttackEntityBehavior {
    pub const STATE_NAME: &'static str = "attackEntity";

    /// Create a new, inactive behavior with both distances at zero.
    ///
    /// Combat commands run on the current tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, use [`Self::with_runtime`] there.
    pub fn new(agent: EntityRef, combat: Arc<dyn CombatEngine>, targets: TargetsRegistry) -> Self {
        Self::with_runtime(agent, combat, targets, Handle::current())
    }

    /// Create a new, inactive behavior whose combat commands run on `runtime`
    pub fn with_runtime(
        agent: EntityRef,
        combat: Arc<dyn CombatEngine>,
        targets: TargetsRegistry,
        runtime: Handle,
    ) -> Self {
        Self {
            agent,
            combat,
            targets,
            runtime,
            activity: Activity::Inactive,
            follow_distance: 0.0,
            attack_distance: 0.0,
            attack_range_mode: AttackRangeMode::FollowDistance,
        }
    }

    /// Apply configured ranges
    pub fn with_settings(mut self, settings: &BehaviorSettings) -> Self {
        self.follow_distance = settings.follow_distance;
        self.attack_distance = settings.attack_distance;
        self.attack_range_mode = settings.attack_range_mode;
        self
    }

    /// Registry this behavior reads its target from
    pub fn targets(&self) -> &TargetsRegistry {
        &self.targets
    }

    /// Sets the entity to attack.
    ///
    /// If the agent is currently attacking another entity it stops and attacks
    /// this one instead. While inactive, the entity is only recorded and will be
    /// attacked when the behavior is next entered. Passing the entity that is
    /// already the target does nothing.
    pub fn set_attack_target(&mut self, entity: EntityRef) {
        if self.targets.holds(&entity) {
            tracing::trace!("{} is already the attack target", entity);
            return;
        }

        tracing::debug!("Attack target changed to {}", entity);
        self.targets.set_entity(entity);
        self.restart();
    }

    /// Stops and restarts the attack against the current target.
    ///
    /// Does nothing while inactive.
    pub fn restart(&mut self) {
        if !self.activity.is_active() {
            return;
        }

        self.stop_attacking();
        self.start_attacking();
    }

    /// Distance to the target entity, or 0 if no target is assigned.
    pub fn distance_to_target(&self) -> f64 {
        match self.targets.entity() {
            Some(target) => self.agent.distance_to(&target),
            None => 0.0,
        }
    }

    /// Range handed to the combat engine as its attack range
    pub fn attack_range(&self) -> f64 {
        match self.attack_range_mode {
            AttackRangeMode::FollowDistance => self.follow_distance,
            AttackRangeMode::AttackDistance => self.attack_distance,
        }
    }

    fn start_attacking(&self) {
        let Some(entity) = self.targets.entity() else {
            tracing::trace!("No attack target assigned");
            return;
        };

        self.combat.set_follow_range(self.follow_distance);
        self.combat.set_attack_range(self.attack_range());
        dispatch(
            &self.runtime,
            CombatCommand::Attack(entity.id()),
            self.combat.attack(entity),
        );
    }

    fn stop_attacking(&self) {
        dispatch(&self.runtime, CombatCommand::Stop, self.combat.stop());
    }
}

impl StateBehavior for AttackEntityBehavior {
    fn state_name(&self) -> &str {
        Self::STATE_NAME
    }

    fn is_active(&self) -> bool {
        self.activity.is_active()
    }

    fn on_state_entered(&mut self) {
        if !self.activity.enter() {
            tracing::warn!("{} entered while already active", Self::STATE_NAME);
            return;
        }
        self.start_attacking();
    }

    fn on_state_exited(&mut self) {
        if !self.activity.exit() {
            tracing::debug!("{} exited while inactive", Self::STATE_NAME);
        }
        self.stop_attacking();
    }
}
