use std::path::Path;

use colored::Colorize;

use tm_anim::find_overlaps;

/// Load the map, print failures, warnings, and overlaps, then a summary.
/// Fails if any animated tile could not be registered.
pub fn run(path: &Path, layer: Option<&str>) -> Result<(), String> {
    let scene = super::load_scene(path, layer, 20)?;
    super::print_load_report(&scene.report);

    let registry = scene.animator.registry();
    let overlaps = find_overlaps(registry);
    for overlap in &overlaps {
        eprintln!("  {} {overlap}", "warning".yellow().bold());
    }

    let failures = scene.report.failures.len();
    if failures > 0 {
        return Err(format!(
            "{failures} animated tile{} could not be registered",
            super::plural(failures)
        ));
    }

    let count = registry.len();
    println!(
        "  All checks passed for '{}' (layer '{}').",
        path.display(),
        super::layer_name(&scene)
    );
    println!(
        "  {count} animation{}, {} animated cell{}",
        super::plural(count),
        registry.location_count(),
        super::plural(registry.location_count()),
    );
    let warnings = scene.report.warnings.len() + overlaps.len();
    if warnings > 0 {
        println!("  {warnings} warning{}", super::plural(warnings));
    }

    Ok(())
}
