/// `tm check`: register every animation and report problems.
pub mod check;
/// `tm sample`: tick once and print the animated layer.
pub mod sample;
/// `tm simulate`: drive the animations on a virtual clock.
pub mod simulate;

use std::path::Path;
use std::time::Duration;

use colored::Colorize;

use tm_anim::{AnimatorConfig, LoadReport, TileAnimator};
use tm_core::tiled::TiledMap;
use tm_core::{LayerId, TileMap};

/// A map loaded from disk with its animations registered.
pub struct Scene {
    /// The grid built from the document.
    pub map: TileMap,
    /// The layer being animated.
    pub layer: LayerId,
    /// Animator with every resolvable animation registered.
    pub animator: TileAnimator,
    /// What the metadata load registered, skipped, and flagged.
    pub report: LoadReport,
}

/// Load a Tiled map, pick the animated layer, and register its animations.
fn load_scene(path: &Path, layer: Option<&str>, period_ms: u64) -> Result<Scene, String> {
    let doc = TiledMap::from_path(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let map = TileMap::from_tiled(&doc).map_err(|e| format!("{}: {e}", path.display()))?;

    let layer = match layer {
        Some(name) => map.layer_id(name).map_err(|e| e.to_string())?,
        None if map.layers().is_empty() => {
            return Err(format!("{} has no tile layers", path.display()));
        }
        None => LayerId(0),
    };

    let config = AnimatorConfig::default()
        .with_layer(layer)
        .with_tick_period(Duration::from_millis(period_ms));
    let mut animator = TileAnimator::new(config);
    let report = animator.load_from_tilemap_metadata(&map, &doc);

    Ok(Scene {
        map,
        layer,
        animator,
        report,
    })
}

/// Print load failures and warnings to stderr.
fn print_load_report(report: &LoadReport) {
    for failure in &report.failures {
        eprintln!("  {} {failure}", "error".red().bold());
    }
    for warning in &report.warnings {
        eprintln!("  {} {warning}", "warning".yellow().bold());
    }
}

fn layer_name(scene: &Scene) -> &str {
    scene
        .map
        .layer(scene.layer)
        .map(|l| l.name.as_str())
        .unwrap_or("?")
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
