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

//! Fire-and-forget execution of combat commands

use super::CombatTask;
use skirmish_common::EntityId;
use std::fmt;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Label for a dispatched command, used in logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatCommand {
    Attack(EntityId),
    Stop,
}

impl fmt::Display for CombatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatCommand::Attack(target) => write!(f, "attack {}", target),
            CombatCommand::Stop => write!(f, "stop"),
        }
    }
}

/// Run a combat task in the background and discard its outcome.
///
/// The task is spawned on `runtime`, so the caller does not need to be inside a
/// runtime context. It runs in the caller's span. Failures are logged and never
/// reach the caller. The returned handle may be dropped without cancelling the
/// task.
pub fn dispatch(runtime: &Handle, command: CombatCommand, task: CombatTask) -> JoinHandle<()> {
    tracing::trace!("Dispatching combat command: {}", command);
    runtime.spawn(
        async move {
            match task.await {
                Ok(()) => tracing::trace!("Combat command completed: {}", command),
                Err(e) => tracing::debug!("Combat command failed: {}: {}", command, e),
            }
        }
        .instrument(tracing::Span::current()),
    )
}
