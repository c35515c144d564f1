// Demonstration: drive one scripted delivery episode and print each step.
//
// The host loop here is intentionally trivial: zone events and body states
// are scripted rather than simulated, which is exactly how the agent sees the
// world from inside a real engine.

use skylift::{
    ActionCommand, AgentEvent, DeliveryAgent, DeliveryConfig, EpisodicAgent, MemorySink,
    ModeAction, SceneLayout, Vec3, Zone,
};

fn main() -> Result<(), skylift::ConfigError> {
    let layout = SceneLayout {
        checkpoints: vec![
            skylift::generate_id(),
            skylift::generate_id(),
            skylift::generate_id(),
        ],
        ..SceneLayout::default()
    };
    let checkpoints = layout.checkpoints.clone();
    let shelter = layout.shelter;
    let warehouse = layout.warehouse;

    let sink = MemorySink::new();
    let mut agent =
        DeliveryAgent::with_sink(DeliveryConfig::default(), layout, Box::new(sink.clone()))?;

    agent.begin_episode();
    let spawn = agent.spawn_body();
    println!("spawn at {}", spawn.position);

    // (description, body position, pre-step zone events, action)
    let script: Vec<(&str, Vec3, Vec<Zone>, ActionCommand)> = vec![
        (
            "cruise toward warehouse",
            Vec3::new(10.0, 12.0, 0.0),
            vec![],
            ActionCommand::new(0.5, 0.0, 0.0, 0.0, 0.0, 0.0, ModeAction::None),
        ),
        (
            "enter warehouse range",
            Vec3::new(warehouse.x, 8.0, warehouse.z),
            vec![Zone::Warehouse],
            ActionCommand::idle(),
        ),
        (
            "pick up cargo",
            Vec3::new(warehouse.x, 8.0, warehouse.z),
            vec![],
            ActionCommand::with_mode(ModeAction::Pickup),
        ),
        (
            "first checkpoint",
            Vec3::new(5.0, 12.0, 10.0),
            vec![Zone::Checkpoint(checkpoints[0].clone())],
            ActionCommand::new(-0.5, 0.5, 0.0, 0.0, 0.0, 0.0, ModeAction::None),
        ),
        (
            "second checkpoint, enter shelter range",
            Vec3::new(shelter.x, 10.0, shelter.z),
            vec![Zone::Checkpoint(checkpoints[1].clone()), Zone::Shelter],
            ActionCommand::idle(),
        ),
        (
            "release over shelter",
            Vec3::new(shelter.x, 10.0, shelter.z),
            vec![],
            ActionCommand::with_mode(ModeAction::Release),
        ),
    ];

    let mut body = spawn;
    let mut total = 0.0;
    for (what, position, zones, action) in script {
        body.position = position;
        for zone in &zones {
            agent.on_zone_enter(zone);
        }
        let result = agent.step(&body, &action);
        total += result.reward.delta;
        println!(
            "{:<40} reward {:+6.2}  ({}){}",
            what,
            result.reward.delta,
            result.reward.reason,
            if result.reward.terminal { "  [terminal]" } else { "" },
        );
        if agent.episode_ended() {
            break;
        }
    }

    println!("\ncumulative reward: {:+.2}", total);
    println!("\nevent log:");
    for event in sink.events() {
        match event {
            AgentEvent::CheckpointCollected(id) => println!("  checkpoint collected ({})", id),
            other => println!("  {:?}", other),
        }
    }
    Ok(())
}
