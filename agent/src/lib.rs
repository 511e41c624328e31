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

//! Skirmish Agent
//!
//! Behaviors an autonomous agent runs while connected to a simulated world,
//! together with the combat engine interface those behaviors drive.

pub mod behavior;
pub mod combat;
pub mod config;

pub use behavior::{Activity, AttackEntityBehavior, AttackRangeMode, StateBehavior};
pub use combat::{CombatEngine, CombatError, CombatTask, SimulatedCombatEngine};
