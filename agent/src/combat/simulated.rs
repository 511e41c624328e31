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

//! In-process combat engine
//!
//! Tracks the engaged target and the configured ranges and reports pursuit
//! progress through tracing. It does not resolve hits. Every `attack` or `stop`
//! supersedes the engagement started by an earlier `attack`.

use super::{CombatEngine, CombatError, CombatTask};
use crate::config::SimulationSettings;
use futures::future;
use skirmish_common::EntityRef;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

#[derive(Debug, Default)]
struct Engagement {
    follow_range: f64,
    attack_range: f64,
    target: Option<EntityRef>,
    generation: u64,
}

/// Combat engine that simulates pursuit of a target on a fixed tick
pub struct SimulatedCombatEngine {
    agent: EntityRef,
    tick: Duration,
    engagement_ticks: u32,
    engagement: Arc<Mutex<Engagement>>,
}

impl SimulatedCombatEngine {
    /// Create a new engine for the given agent
    pub fn new(agent: EntityRef, tick: Duration, engagement_ticks: u32) -> Self {
        Self {
            agent,
            tick,
            engagement_ticks,
            engagement: Arc::new(Mutex::new(Engagement::default())),
        }
    }

    /// Create a new engine from simulation settings
    pub fn from_settings(agent: EntityRef, settings: &SimulationSettings) -> Self {
        Self::new(
            agent,
            Duration::from_millis(settings.tick_millis),
            settings.engagement_ticks,
        )
    }

    /// Currently engaged target, if any
    pub fn engaged_target(&self) -> Option<EntityRef> {
        self.lock().target.clone()
    }

    pub fn follow_range(&self) -> f64 {
        self.lock().follow_range
    }

    pub fn attack_range(&self) -> f64 {
        self.lock().attack_range
    }

    fn lock(&self) -> MutexGuard<'_, Engagement> {
        lock(&self.engagement)
    }
}

fn lock(engagement: &Mutex<Engagement>) -> MutexGuard<'_, Engagement> {
    engagement.lock().unwrap_or_else(PoisonError::into_inner)
}

impl CombatEngine for SimulatedCombatEngine {
    fn set_follow_range(&self, range: f64) {
        self.lock().follow_range = range;
    }

    fn set_attack_range(&self, range: f64) {
        self.lock().attack_range = range;
    }

    fn attack(&self, target: EntityRef) -> CombatTask {
        let (generation, follow_range, attack_range) = {
            let mut engagement = self.lock();
            engagement.generation += 1;
            engagement.target = Some(target.clone());
            (
                engagement.generation,
                engagement.follow_range,
                engagement.attack_range,
            )
        };
        tracing::info!(
            "Engaging {} (follow range {}, attack range {})",
            target,
            follow_range,
            attack_range
        );

        let agent = self.agent.clone();
        let engagement = self.engagement.clone();
        let tick = self.tick;
        let ticks = self.engagement_ticks;

        Box::pin(async move {
            let mut interval = tokio::time::interval(tick);
            for _ in 0..ticks {
                interval.tick().await;
                if lock(&engagement).generation != generation {
                    tracing::debug!("Engagement of {} superseded", target);
                    return Err(CombatError::Superseded);
                }

                let distance = agent.distance_to(&target);
                if distance <= attack_range {
                    tracing::trace!("{} within attack range ({:.2})", target, distance);
                } else if distance > follow_range {
                    tracing::trace!("Closing in on {} ({:.2})", target, distance);
                }
            }

            let mut engagement = lock(&engagement);
            if engagement.generation == generation {
                engagement.target = None;
            }
            tracing::info!("Engagement of {} finished", target);
            Ok(())
        })
    }

    fn stop(&self) -> CombatTask {
        let previous = {
            let mut engagement = self.lock();
            engagement.generation += 1;
            engagement.target.take()
        };
        if let Some(target) = previous {
            tracing::info!("Disengaging from {}", target);
        }
        Box::pin(future::ready(Ok(())))
    }
}
