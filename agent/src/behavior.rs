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

//! Agent behavior states
//!
//! A behavior is one state of the agent's state machine. The machine itself is
//! external: it decides when a behavior becomes current and calls the lifecycle
//! hooks of [`StateBehavior`] on each transition.

mod attack_entity;

pub use self::attack_entity::{AttackEntityBehavior, AttackRangeMode};

/// Lifecycle contract between a state machine and one of its states
pub trait StateBehavior: Send {
    /// Identifier used by the state machine for diagnostics and transition lookups
    fn state_name(&self) -> &str;

    /// Returns true while this behavior is the current state
    fn is_active(&self) -> bool;

    /// Called once when this behavior becomes the current state
    fn on_state_entered(&mut self);

    /// Called once when the state machine transitions away from this behavior
    fn on_state_exited(&mut self);
}

/// Activation state of a behavior
///
/// Inactive -> Active on entry, Active -> Inactive on exit. Behaviors own this
/// value and update it from their lifecycle hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Inactive,
    Active,
}

impl Activity {
    pub fn is_active(&self) -> bool {
        matches!(self, Activity::Active)
    }

    /// Transition to Active. Returns false if already active.
    pub fn enter(&mut self) -> bool {
        let entered = !self.is_active();
        *self = Activity::Active;
        entered
    }

    /// Transition to Inactive. Returns false if already inactive.
    pub fn exit(&mut self) -> bool {
        let exited = self.is_active();
        *self = Activity::Inactive;
        exited
    }
}

#[cfg(test)]
mod tests {
    use super::Activity;

    #[test]
    fn test_activity_transitions() {
        let mut activity = Activity::default();
        assert!(!activity.is_active());

        assert!(activity.enter());
        assert!(activity.is_active());
        assert!(!activity.enter());

        assert!(activity.exit());
        assert!(!activity.is_active());
        assert!(!activity.exit());
    }
}
