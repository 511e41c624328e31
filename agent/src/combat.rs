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

//! Combat engine interface
//!
//! The combat engine resolves pursuit and attack mechanics for the agent. Behaviors
//! only issue commands to it: every command returns immediately with a
//! [`CombatTask`] describing its completion, and callers are free to drop that
//! task's result.

mod dispatch;
mod simulated;

pub use self::dispatch::{CombatCommand, dispatch};
pub use self::simulated::SimulatedCombatEngine;

use futures::future::BoxFuture;
use skirmish_common::EntityRef;
use thiserror::Error;

/// Completion of a combat command
pub type CombatTask = BoxFuture<'static, Result<(), CombatError>>;

/// Failures reported by a combat engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("Target is dead")]
    TargetDead,

    #[error("Target is unreachable")]
    TargetUnreachable,

    #[error("Command superseded by a later command")]
    Superseded,

    #[error("Combat engine error: {0}")]
    Engine(String),
}

/// Commands understood by a combat engine
///
/// Ranges are side-channel settings read by the next [`CombatEngine::attack`].
#[cfg_attr(test, mockall::automock)]
pub trait CombatEngine: Send + Sync {
    /// Distance the agent keeps from its target while pursuing it
    fn set_follow_range(&self, range: f64);

    /// Distance at which the agent starts striking its target
    fn set_attack_range(&self, range: f64);

    /// Begin pursuing and attacking an entity, replacing any current target
    fn attack(&self, target: EntityRef) -> CombatTask;

    /// Halt any in-progress attack
    fn stop(&self) -> CombatTask;
}
