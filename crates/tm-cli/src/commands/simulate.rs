use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use tm_anim::ManualDriver;

/// Longest run, in driver ticks, a single simulation may take.
const MAX_TICKS: u64 = 1_000_000;

/// Drive the map's animations on a virtual clock and print a summary.
pub fn run(
    path: &Path,
    layer: Option<&str>,
    duration: u64,
    period: u64,
    verbose: bool,
) -> Result<(), String> {
    if period == 0 {
        return Err("period must be at least 1 ms".into());
    }
    let ticks = duration / period;
    if ticks > MAX_TICKS {
        return Err(format!(
            "simulation would run {ticks} ticks (limit {MAX_TICKS}); shorten --duration or raise --period"
        ));
    }

    let mut scene = super::load_scene(path, layer, period)?;
    super::print_load_report(&scene.report);

    if scene.animator.registry().is_empty() {
        println!("  No animated tiles found. Nothing to simulate.");
        return Ok(());
    }

    let mut driver = ManualDriver::new();
    scene.animator.start(&mut driver);

    let mut active_ticks = 0usize;
    let mut log = Vec::new();
    while let Some(firing) = driver.next_firing(duration) {
        let Some(report) = scene
            .animator
            .on_timer(firing.handle, &mut scene.map, firing.at_ms)
        else {
            continue;
        };
        if report.is_idle() {
            continue;
        }
        active_ticks += 1;
        if verbose {
            let changed: Vec<String> = report
                .changed
                .iter()
                .map(|h| {
                    let frame = scene
                        .animator
                        .registry()
                        .get(*h)
                        .map_or(0, |d| d.current_frame());
                    format!("{h} -> frame {frame}")
                })
                .collect();
            log.push(format!(
                "  {} {} {}",
                format!("[{:>7} ms]", report.now_ms).dimmed(),
                changed.join(", ").cyan(),
                format!("({} cells)", report.cells_written).dimmed()
            ));
        }
    }

    scene.animator.stop(&mut driver);

    // Header
    let scheduler = scene.animator.scheduler();
    println!(
        "  {} '{}' {}",
        "Simulation".bold(),
        path.display(),
        format!("(layer '{}', {duration} ms, period {period} ms)", super::layer_name(&scene)).dimmed()
    );
    println!(
        "  {} ticks, {} with frame changes, {} cell writes, {} recompute{}",
        scheduler.ticks(),
        active_ticks,
        scheduler.cells_written(),
        scheduler.recomputes(),
        super::plural(scheduler.recomputes() as usize),
    );
    println!();

    if verbose {
        println!("  {}", "Tick Log".bold().underline());
        println!();
        for line in &log {
            println!("{line}");
        }
        if log.is_empty() {
            println!("  {}", "(no frame changes)".dimmed());
        }
        println!();
    }

    println!("  {}", "Animations".bold().underline());
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Handle", "Tileset", "Frames", "Interval", "Cells", "Frame",
    ]);
    for (handle, def) in scene.animator.registry().iter() {
        let frames: Vec<String> = def.frames().iter().map(|f| f.to_string()).collect();
        table.add_row(vec![
            handle.to_string(),
            def.tileset().name.clone(),
            frames.join(" "),
            format!("{} ms", def.interval_ms()),
            def.locations().len().to_string(),
            format!("{} / {}", def.current_frame(), def.frames().len()),
        ]);
    }
    println!("{table}");
    println!();

    Ok(())
}
