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

use skirmish_agent::config::{Arguments, Configuration};
use skirmish_agent::{AttackEntityBehavior, SimulatedCombatEngine, StateBehavior};
use skirmish_common::{Entity, Position, TargetsRegistry};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .with_ansi(true)
        .init();

    // Load arguments from the command line and the environment file
    let arguments = Arguments::load_from(std::env::args_os()).unwrap_or_else(|e| e.exit());

    let mut config = if std::path::Path::new(&arguments.config_file).exists() {
        Configuration::load(&arguments.config_file)?
    } else {
        tracing::warn!(
            "Configuration file {} not found, using defaults",
            arguments.config_file
        );
        Configuration::default()
    };
    config.apply_arguments(&arguments)?;
    tracing::debug!("Configuration loaded: {:?}", config);

    tracing::info!("Spawning agent and hostile entities...");
    let agent = Entity::spawn("Agent", Position::ZERO);
    let zombie = Entity::spawn("Zombie", Position::new(8.0, 0.0, 0.0));
    let skeleton = Entity::spawn("Skeleton", Position::new(0.0, 0.0, 12.0));

    let engine = Arc::new(SimulatedCombatEngine::from_settings(
        agent.clone(),
        &config.simulation,
    ));
    let targets = TargetsRegistry::new();
    let mut behavior = AttackEntityBehavior::new(agent.clone(), engine.clone(), targets.clone())
        .with_settings(&config.behavior);

    let pause = Duration::from_millis(config.simulation.tick_millis * 5);

    tracing::info!("Entering {} with no target", behavior.state_name());
    behavior.on_state_entered();
    tokio::time::sleep(pause).await;
    behavior.on_state_exited();

    tracing::info!("Assigning {} while inactive", zombie);
    behavior.set_attack_target(zombie.clone());
    tracing::info!("Distance to target: {:.2}", behavior.distance_to_target());

    tracing::info!("Entering {}", behavior.state_name());
    behavior.on_state_entered();
    for step in 1..=3 {
        tokio::time::sleep(pause).await;
        zombie.set_position(Position::new(8.0 - 2.0 * step as f64, 0.0, 0.0));
        tracing::info!("Distance to target: {:.2}", behavior.distance_to_target());
    }

    tracing::info!("Redirecting to {}", skeleton);
    behavior.set_attack_target(skeleton.clone());
    tokio::time::sleep(pause).await;
    tracing::info!("Distance to target: {:.2}", behavior.distance_to_target());

    tracing::info!("Exiting {}", behavior.state_name());
    behavior.on_state_exited();
    tokio::time::sleep(pause).await;

    match engine.engaged_target() {
        Some(target) => tracing::warn!("Still engaged with {}", target),
        None => tracing::info!("Agent disengaged"),
    }

    Ok(())
}
