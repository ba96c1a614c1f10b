use particle_arena::*;

fn main() -> Result<()> {
    let mut world = World::new(800.0, 200.0)?;

    world.place_body(DVec2::new(150.0, 100.0), 20.0, 1.0, DVec2::new(4.0, 0.0))?;
    for i in 0..4 {
        world.place_body(DVec2::new(300.0 + 40.0 * i as f64, 100.0), 20.0, 1.0, DVec2::ZERO)?;
    }

    for frame in 0..60 {
        world.step();
        let speeds: Vec<String> = world
            .bodies()
            .iter()
            .map(|body| format!("{:5.2}", body.velocity.x))
            .collect();
        println!("frame {frame:2}: [{}]", speeds.join(", "));
    }

    println!(
        "momentum {:?}, energy {:.3}",
        world.total_momentum(),
        world.total_kinetic_energy()
    );
    Ok(())
}
