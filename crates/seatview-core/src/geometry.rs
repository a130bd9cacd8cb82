//! Planar geometry primitives for seatmap coordinate mapping.
//!
//! All functions here are pure and operate on polygons given as slices of
//! normalized [`Vec2`] vertices. Degenerate inputs (empty polygons,
//! zero-length edges) resolve to defined fallback values rather than errors.

use glam::{Vec2, Vec3};

/// Tests whether a point lies inside a polygon using ray casting (even-odd rule).
///
/// A horizontal ray is cast from the point in the +x direction and crossings
/// are counted against every edge whose y-span straddles the point. Edges with
/// equal endpoint y-coordinates never straddle, so no division by zero can
/// occur. Points exactly on an edge have no inclusion guarantee; callers must
/// not rely on boundary behavior.
pub fn point_in_polygon(x: f32, y: f32, polygon: &[Vec2]) -> bool {
    let n = polygon.len();
    let mut inside = false;

    let mut j = n.wrapping_sub(1);
    for i in 0..n {
        let pi = polygon[i];
        let pj = polygon[j];

        if (pi.y > y) != (pj.y > y) && x < (pj.x - pi.x) * (y - pi.y) / (pj.y - pi.y) + pi.x {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Computes the arithmetic mean of the polygon's vertices.
///
/// This is the vertex centroid, not the area-weighted centroid; it is what
/// section angle derivation expects. Returns the origin for an empty polygon,
/// a defined but meaningless value - callers never pass empty polygons in
/// practice.
pub fn polygon_centroid(polygon: &[Vec2]) -> Vec2 {
    if polygon.is_empty() {
        return Vec2::ZERO;
    }

    let sum: Vec2 = polygon.iter().copied().sum();
    sum / polygon.len() as f32
}

/// Computes the minimum distance from a point to the polygon's edges, and the
/// point's normalized depth within the polygon.
///
/// The depth is the distance from the centroid divided by the maximum
/// centroid-to-vertex radius, clamped to [0, 1]. It approximates how far back
/// in a seating section the point lies (0 = front, 1 = back row) and stands in
/// for row position downstream.
///
/// Polygons with fewer than 3 vertices return `(0.0, 0.5)`.
pub fn distance_to_polygon_edge(x: f32, y: f32, polygon: &[Vec2]) -> (f32, f32) {
    let n = polygon.len();
    if n < 3 {
        return (0.0, 0.5);
    }

    let p = Vec2::new(x, y);
    let centroid = polygon_centroid(polygon);

    let mut min_dist = f32::INFINITY;
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];

        let edge = b - a;
        let length_sq = edge.length_squared();

        // Zero-length edges collapse to point distance.
        let dist = if length_sq == 0.0 {
            p.distance(a)
        } else {
            let t = ((p - a).dot(edge) / length_sq).clamp(0.0, 1.0);
            p.distance(a + t * edge)
        };

        min_dist = min_dist.min(dist);
    }

    let dist_from_center = p.distance(centroid);
    let max_radius = polygon
        .iter()
        .map(|v| v.distance(centroid))
        .fold(0.0_f32, f32::max);

    let normalized_depth = if max_radius > 0.0 {
        (dist_from_center / max_radius).min(1.0)
    } else {
        0.5
    };

    (min_dist, normalized_depth)
}

/// Computes the angle of a point about a center, in image-space degrees.
///
/// The convention is fixed: 0 degrees points "up" in image space (toward the
/// venue entrance behind the focal point), positive angles rotate clockwise,
/// and the result lies in (-180, 180]. Cylindrical camera placement depends on
/// this exact convention. Note the y negation: image y grows downward.
pub fn calculate_angle_from_center(x: f32, y: f32, center_x: f32, center_y: f32) -> f32 {
    let dx = x - center_x;
    // Computed as center_y - y rather than -(y - center_y): the latter is
    // negative zero at the exact center, and atan2(0, -0) is pi, not 0.
    let up = center_y - y;

    dx.atan2(up).to_degrees()
}

/// Linearly interpolates between two 3D points.
///
/// `t` is not clamped; callers clamp where needed.
pub fn interpolate_position(t: f32, start: Vec3, end: Vec3) -> Vec3 {
    start + t * (end - start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn unit_square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn test_point_in_square() {
        let square = unit_square();
        assert!(point_in_polygon(0.5, 0.5, &square));
        assert!(!point_in_polygon(2.0, 2.0, &square));
        assert!(!point_in_polygon(-0.5, 0.5, &square));
    }

    #[test]
    fn test_point_in_polygon_degenerate() {
        // Empty and sub-triangle inputs never match, never panic.
        assert!(!point_in_polygon(0.5, 0.5, &[]));
        assert!(!point_in_polygon(0.5, 0.5, &[Vec2::new(0.5, 0.5)]));

        // Horizontal edges (equal y endpoints) are skipped by the straddle test.
        let flat = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.5, 1.0),
        ];
        assert!(point_in_polygon(0.5, 0.4, &flat));
    }

    #[test]
    fn test_centroid_square() {
        let square = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
        ];
        let c = polygon_centroid(&square);
        assert!((c - Vec2::new(1.0, 1.0)).length() < 1e-6);
    }

    #[test]
    fn test_centroid_empty() {
        assert_eq!(polygon_centroid(&[]), Vec2::ZERO);
    }

    #[test]
    fn test_distance_to_edge_center_of_square() {
        let square = unit_square();
        let (min_dist, depth) = distance_to_polygon_edge(0.5, 0.5, &square);
        assert!((min_dist - 0.5).abs() < 1e-6);
        // The centroid has zero depth.
        assert!(depth.abs() < 1e-6);
    }

    #[test]
    fn test_distance_to_edge_near_corner() {
        let square = unit_square();
        let (min_dist, depth) = distance_to_polygon_edge(0.9, 0.9, &square);
        assert!((min_dist - 0.1).abs() < 1e-6);
        // Near a vertex the depth approaches 1, and stays clamped.
        assert!(depth > 0.7 && depth <= 1.0);
    }

    #[test]
    fn test_distance_to_edge_degenerate() {
        assert_eq!(distance_to_polygon_edge(0.3, 0.3, &[]), (0.0, 0.5));
        let two = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
        assert_eq!(distance_to_polygon_edge(0.3, 0.3, &two), (0.0, 0.5));
    }

    #[test]
    fn test_angle_at_center_is_zero() {
        assert_eq!(calculate_angle_from_center(0.5, 0.5, 0.5, 0.5), 0.0);
    }

    #[test]
    fn test_angle_convention() {
        // Straight up in image space (smaller y) is 0 degrees.
        assert!(calculate_angle_from_center(0.5, 0.3, 0.5, 0.5).abs() < 1e-5);
        // Right of center is positive (clockwise).
        let right = calculate_angle_from_center(0.6, 0.45, 0.5, 0.45);
        assert!((right - 90.0).abs() < 1e-4);
        // Left of center is negative.
        let left = calculate_angle_from_center(0.4, 0.45, 0.5, 0.45);
        assert!((left + 90.0).abs() < 1e-4);
        // Straight down is 180, the inclusive end of the range.
        let down = calculate_angle_from_center(0.5, 0.7, 0.5, 0.5);
        assert!((down - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_interpolate_position() {
        let start = Vec3::new(0.0, 0.0, 0.0);
        let end = Vec3::new(10.0, -20.0, 4.0);
        assert_eq!(interpolate_position(0.0, start, end), start);
        assert_eq!(interpolate_position(1.0, start, end), end);
        let mid = interpolate_position(0.5, start, end);
        assert!((mid - Vec3::new(5.0, -10.0, 2.0)).length() < 1e-6);
    }

    /// Generates a convex polygon: a regular n-gon scaled and offset.
    fn convex_polygon(n: usize, cx: f32, cy: f32, r: f32) -> Vec<Vec2> {
        (0..n)
            .map(|i| {
                let theta = std::f32::consts::TAU * i as f32 / n as f32;
                Vec2::new(cx + r * theta.cos(), cy + r * theta.sin())
            })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_centroid_inside_convex_polygon(
            n in 3usize..12,
            cx in -5.0f32..5.0,
            cy in -5.0f32..5.0,
            r in 0.1f32..10.0,
        ) {
            let poly = convex_polygon(n, cx, cy, r);
            let c = polygon_centroid(&poly);
            prop_assert!(point_in_polygon(c.x, c.y, &poly));
        }

        #[test]
        fn prop_depth_always_in_unit_range(
            n in 3usize..12,
            px in -2.0f32..2.0,
            py in -2.0f32..2.0,
        ) {
            let poly = convex_polygon(n, 0.0, 0.0, 1.0);
            let (dist, depth) = distance_to_polygon_edge(px, py, &poly);
            prop_assert!(dist >= 0.0);
            prop_assert!((0.0..=1.0).contains(&depth));
        }

        #[test]
        fn prop_angle_in_half_open_range(
            x in -1.0f32..2.0,
            y in -1.0f32..2.0,
        ) {
            let angle = calculate_angle_from_center(x, y, 0.5, 0.5);
            prop_assert!(angle > -180.0 - 1e-4);
            prop_assert!(angle <= 180.0 + 1e-4);
        }
    }
}
