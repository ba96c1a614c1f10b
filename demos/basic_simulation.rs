use particle_arena::*;

fn main() -> Result<()> {
    let mut world = World::new(800.0, 600.0)?;
    world.set_retention(0.9)?;

    world.place_body(DVec2::new(100.0, 300.0), 10.0, 1.0, DVec2::new(2.0, 0.0))?;
    world.place_body(DVec2::new(150.0, 300.0), 10.0, 1.0, DVec2::new(-2.0, 0.0))?;
    world.place_body(DVec2::new(400.0, 200.0), 20.0, 4.0, launch_velocity(3.0, 135.0))?;

    for frame in 0..120 {
        world.step();
        if frame % 30 == 0 {
            println!(
                "frame {frame:3}: collisions {}, kinetic energy {:.3}",
                world.collision_count(),
                world.total_kinetic_energy()
            );
        }
    }

    for (handle, body) in world.handles().zip(world.bodies()) {
        println!(
            "body {}: position ({:.1}, {:.1}) velocity ({:.2}, {:.2})",
            handle.index(),
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y
        );
    }
    Ok(())
}
