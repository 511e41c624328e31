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

//! Skirmish Common Types
//!
//! This crate defines the world-model types shared between an agent's behaviors
//! and the collaborators that drive them:
//! - Entity handles with identity and a live position
//! - The shared targets registry behaviors read from and write to

pub mod entity;
pub mod targets;

pub use entity::{Entity, EntityId, EntityRef, Position};
pub use targets::{Targets, TargetsRegistry};
