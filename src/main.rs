use ant_foraging::prelude::*;
use ant_foraging::render;
use clap::Parser;
use std::path::Path;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let config = SimConfig {
        ants: args.ants,
        decay_interval: args.decay_interval,
        ..SimConfig::default()
    };
    config.validate()?;

    // Build world and ants
    let mut world = WorldGrid::from_config(&config);
    let colony = Vec2::new(config.colony_origin.0 as f32, config.colony_origin.1 as f32);
    let mut ants = Ant::spawn(config.ants, colony);

    // Run simulation
    let mut engine = SimulationEngine::new(config.clone());
    let simulation_time = engine.run_simulation(&mut world, &mut ants, &args, &mut rng);

    // Print results
    engine.print_summary(&world, &args, simulation_time);

    if let Some(path) = &args.frame_out {
        render::write_ppm(
            Path::new(path),
            &world,
            &ants,
            args.show_pheromone,
            config.max_lifetime,
        )?;
    }

    Ok(())
}
