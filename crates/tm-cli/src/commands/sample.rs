use std::path::Path;

use tm_core::{TileGrid, TilePos};

/// Tick once at `at` ms and print the animated layer as a grid of tile ids.
pub fn run(path: &Path, layer: Option<&str>, at: u64) -> Result<(), String> {
    let mut scene = super::load_scene(path, layer, 20)?;
    super::print_load_report(&scene.report);

    let report = scene.animator.tick(&mut scene.map, at);

    println!(
        "  Layer '{}' at {at} ms ({} animation{} changed frame)",
        super::layer_name(&scene),
        report.changed.len(),
        super::plural(report.changed.len()),
    );
    println!();

    let (width, height) = (scene.map.width(), scene.map.height());
    let cell_width = scene
        .map
        .positions()
        .map(|pos| scene.map.tile(scene.layer, pos).to_string().len())
        .max()
        .unwrap_or(1);

    for y in 0..height {
        let row: Vec<String> = (0..width)
            .map(|x| {
                let tile = scene.map.tile(scene.layer, TilePos::new(x, y));
                format!("{tile:>cell_width$}")
            })
            .collect();
        println!("  {}", row.join(" "));
    }

    Ok(())
}
