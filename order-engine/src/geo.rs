//! Geographic containment primitives for delivery zones

use shared::models::GeoPoint;

/// Great-circle distance in meters between two points
///
/// Spherical law of cosines with the minute-of-arc approximation
/// (degrees x 60 x 1.1515 statute miles, then meters). Zone boundaries
/// across the platform are defined in terms of this exact formula — do not
/// substitute a different geodesic, it would silently move them.
pub fn distance_meters(a: GeoPoint, b: GeoPoint) -> f64 {
    let theta = a.lng - b.lng;
    let cos_angle = a.lat.to_radians().sin() * b.lat.to_radians().sin()
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * theta.to_radians().cos();
    // Floating error can push the cosine past 1.0 for near-identical points
    let angle = cos_angle.clamp(-1.0, 1.0).acos();
    angle.to_degrees() * 60.0 * 1.1515 * 1609.344
}

/// Even-odd (crossing number) point-in-polygon test
///
/// Vertices are taken in (lat, lng) order, the same axis order the circle
/// test uses. The polygon is closed automatically when the last vertex
/// differs from the first, so open and pre-closed sequences give identical
/// results. Fewer than 3 vertices contain nothing.
pub fn point_in_polygon(point: GeoPoint, vertices: &[GeoPoint]) -> bool {
    if vertices.len() < 3 {
        return false;
    }

    let mut polygon: Vec<GeoPoint> = vertices.to_vec();
    if polygon.first() != polygon.last() {
        polygon.push(polygon[0]);
    }

    let y = point.lat;
    let x = point.lng;
    let n = polygon.len();
    let mut odd_nodes = false;

    for i in 0..n {
        let j = (i + 1) % n;
        let (y_i, x_i) = (polygon[i].lat, polygon[i].lng);
        let (y_j, x_j) = (polygon[j].lat, polygon[j].lng);

        let edge_crosses = (y_i < y && y_j >= y) || (y_j < y && y_i >= y);
        if edge_crosses && x_i + (y - y_i) / (y_j - y_i) * (x_j - x_i) < x {
            odd_nodes = !odd_nodes;
        }
    }

    odd_nodes
}
