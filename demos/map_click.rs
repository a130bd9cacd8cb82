//! Maps a handful of seatmap clicks to camera poses for a small in-code venue.
//!
//! Run with: cargo run --example map_click

use std::collections::HashMap;

use seatview::*;

fn build_venue() -> Venue {
    Venue {
        id: "demo_park".to_string(),
        name: "Demo Park".to_string(),
        venue_type: VenueType::Baseball,
        seatmap: SeatmapConfig {
            file: "seatmap.png".to_string(),
            width: 1280,
            height: 1024,
        },
        field_center: Vec3::ZERO,
        seating_anchor: Vec3::new(0.0, -27.0, 0.0),
        tiers: HashMap::from([
            (
                100,
                Tier {
                    elevation: 5.0,
                    distance_range: (30.0, 60.0),
                },
            ),
            (
                200,
                Tier {
                    elevation: 18.0,
                    distance_range: (50.0, 80.0),
                },
            ),
        ]),
        sections: vec![
            Section {
                id: "home_lower".to_string(),
                tier: 100,
                polygon: vec![
                    Vec2::new(0.42, 0.55),
                    Vec2::new(0.58, 0.55),
                    Vec2::new(0.58, 0.70),
                    Vec2::new(0.42, 0.70),
                ],
                angle: 0.0,
                row_count: Some(24),
            },
            Section {
                id: "first_base_200".to_string(),
                tier: 200,
                polygon: vec![
                    Vec2::new(0.62, 0.45),
                    Vec2::new(0.78, 0.45),
                    Vec2::new(0.78, 0.62),
                    Vec2::new(0.62, 0.62),
                ],
                angle: 60.0,
                row_count: None,
            },
        ],
    }
}

fn main() {
    env_logger::init();

    let mapper = CoordinateMapper::new(build_venue());

    let clicks = [
        (640.0, 640.0, "center behind home plate"),
        (896.0, 548.0, "first base side, mid level"),
        (100.0, 100.0, "far corner, unmapped"),
    ];

    for (x, y, label) in clicks {
        println!("\n{label} ({x}, {y}):");

        match mapper.get_section_info(x, y, None) {
            Some(info) => println!(
                "  section {} (tier {}, angle {} deg)",
                info.section_id, info.tier, info.angle
            ),
            None => println!("  not in a defined section, using fallback estimate"),
        }

        let camera = mapper.map_to_camera_position(x, y, None);
        let p = camera.position;
        let r = camera.rotation;
        println!("  position ({:.1}, {:.1}, {:.1}) m", p.x, p.y, p.z);
        println!("  rotation ({:.2}, {:.2}, {:.2}) rad, fov {} deg", r.x, r.y, r.z, camera.fov);
    }
}
