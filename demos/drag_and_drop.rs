use particle_arena::*;

fn main() -> Result<()> {
    let mut engine = ArenaEngine::new(WorldConfig::default().with_retention(0.8))?;

    engine.launch(DVec2::new(200.0, 300.0), 15.0, 2.0, 4.0, 0.0)?;
    engine.launch(DVec2::new(600.0, 300.0), 15.0, 2.0, 0.0, 0.0)?;

    // Pick up the resting body and hold it in the path of the moving one.
    if let Some(handle) = engine.begin_drag(DVec2::new(600.0, 305.0)) {
        println!("dragging body {}", handle.index());
        engine.drag_to(DVec2::new(400.0, 300.0))?;
    }

    for _ in 0..60 {
        engine.tick();
    }
    engine.end_drag();

    engine.toggle_pause();
    println!("paused, tick ran: {}", engine.tick());
    engine.toggle_pause();

    let time_scale = engine.world_mut().cycle_time_scale();
    for _ in 0..30 {
        engine.tick();
    }

    let world = engine.world();
    println!(
        "time scale {time_scale}, collisions {}, energy {:.3}",
        world.collision_count(),
        world.total_kinetic_energy()
    );
    world.last_step_metrics().report();
    Ok(())
}
