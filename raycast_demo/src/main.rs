//! Ray Casting Demo
//!
//! Loads a scene file, casts its ray against every group and prints:
//! - the broad-phase window of each group the ray reaches
//! - every entry/exit event, in ray order
//! - the nearest hit across all groups

use hitbox_raycast::foundation::logging;
use hitbox_raycast::prelude::*;
use log::{info, warn};

const DEFAULT_SCENE: &str = "raycast_demo/resources/scene.ron";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_SCENE.to_string());
    info!("Loading scene from {path}");

    let scene = SceneConfig::load_from_file(&path)?;
    let ray = scene.build_ray()?;
    let groups = scene.build_groups()?;

    println!("=== Ray Casting Demo ===");
    println!("Ray origin {:?} direction {:?}", ray.origin().as_slice(), ray.direction().as_slice());
    println!("{} groups loaded", groups.len());
    println!();

    let casts = cast_groups(&groups, &ray);
    if casts.len() < groups.len() {
        info!("Broad phase rejected {} of {} groups", groups.len() - casts.len(), groups.len());
    }

    for (index, cast) in casts.iter().enumerate() {
        println!("Cast #{index}: sphere window [{:.3}, {:.3}]", cast.inlet(), cast.outlet());

        let mut cursor = cast.cursor();
        if !cursor.has_next() {
            println!("  no hitbox hit");
        }
        while let Some(collision) = cursor.advance() {
            let point = collision.point().point();
            println!(
                "  {:?} at {:.3} ({:.3}, {:.3}, {:.3})",
                collision.kind(),
                collision.distance(),
                point.x,
                point.y,
                point.z,
            );
        }

        if let (Some(inlet), Some(outlet)) = (cast.actual_inlet(), cast.actual_outlet()) {
            println!("  actual window [{inlet:.3}, {outlet:.3}]");
        }
    }

    println!();
    match first_collision(&casts) {
        Some(hit) => println!("Nearest hit: {:?} at distance {:.3}", hit.hit_box().kind(), hit.distance()),
        None => {
            warn!("Ray hit nothing");
            println!("Nearest hit: none");
        }
    }

    let events: Vec<_> = MergedCursor::new(&casts).map(|c| (c.kind(), c.distance())).collect();
    println!("All events in ray order: {events:?}");

    Ok(())
}
