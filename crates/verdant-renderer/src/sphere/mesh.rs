//! UV sphere mesh generation.

use super::types::SphereVertex;

/// Generate a UV sphere as a plain triangle list (no index buffer).
///
/// `width_segments` is the number of longitude columns, `height_segments`
/// the number of latitude rows. Each quad contributes 6 vertices, so the
/// mesh has `width_segments * height_segments * 6` entries.
///
/// Centered at the origin with the north pole at (0, radius, 0).
pub fn generate_sphere_mesh(radius: f32, width_segments: u32, height_segments: u32) -> Vec<SphereVertex> {
    let n_lon = width_segments.max(3);
    let n_lat = height_segments.max(2);

    let mut vertices = Vec::with_capacity((n_lat * n_lon * 6) as usize);

    for lat in 0..n_lat {
        for lon in 0..n_lon {
            // Unit-sphere corners of this quad; normal == unit position
            let p00 = unit_point(lat, lon, n_lat, n_lon);
            let p10 = unit_point(lat + 1, lon, n_lat, n_lon);
            let p01 = unit_point(lat, lon + 1, n_lat, n_lon);
            let p11 = unit_point(lat + 1, lon + 1, n_lat, n_lon);

            // Counter-clockwise seen from outside, so back-face culling keeps
            // the near hemisphere
            for corner in [p00, p01, p10, p01, p11, p10] {
                vertices.push(SphereVertex {
                    position: [corner[0] * radius, corner[1] * radius, corner[2] * radius],
                    normal: corner,
                });
            }
        }
    }

    vertices
}

/// Point on the unit sphere for a latitude/longitude grid index.
fn unit_point(lat: u32, lon: u32, n_lat: u32, n_lon: u32) -> [f32; 3] {
    let theta = std::f32::consts::PI * (lat as f32) / (n_lat as f32);
    let phi = 2.0 * std::f32::consts::PI * (lon as f32) / (n_lon as f32);

    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    [sin_theta * cos_phi, cos_theta, sin_theta * sin_phi]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_count_matches_segment_grid() {
        let mesh = generate_sphere_mesh(3.0, 8, 4);
        assert_eq!(mesh.len(), (8 * 4 * 6) as usize);
    }

    #[test]
    fn default_quality_vertex_count() {
        let mesh = generate_sphere_mesh(3.0, 64, 64);
        assert_eq!(mesh.len(), (64 * 64 * 6) as usize);
    }

    #[test]
    fn first_vertex_is_north_pole() {
        let mesh = generate_sphere_mesh(3.0, 8, 4);
        let v = &mesh[0];
        assert!((v.position[0]).abs() < 1e-5);
        assert!((v.position[1] - 3.0).abs() < 1e-5);
        assert!((v.position[2]).abs() < 1e-5);
    }

    #[test]
    fn positions_lie_on_the_radius() {
        let mesh = generate_sphere_mesh(2.5, 12, 6);
        for v in &mesh {
            let r = (v.position[0].powi(2) + v.position[1].powi(2) + v.position[2].powi(2)).sqrt();
            assert!((r - 2.5).abs() < 1e-4, "vertex radius = {r}");
        }
    }

    #[test]
    fn normals_are_unit_length_and_outward() {
        let mesh = generate_sphere_mesh(3.0, 12, 6);
        for v in &mesh {
            let len = (v.normal[0].powi(2) + v.normal[1].powi(2) + v.normal[2].powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
            // Outward: normal points along the position vector
            let dot = v.normal[0] * v.position[0]
                + v.normal[1] * v.position[1]
                + v.normal[2] * v.position[2];
            assert!(dot > 0.0, "inward normal");
        }
    }

    #[test]
    fn degenerate_segment_counts_are_clamped() {
        let mesh = generate_sphere_mesh(1.0, 1, 0);
        assert_eq!(mesh.len(), (3 * 2 * 6) as usize);
    }

    #[test]
    fn triangles_wind_counter_clockwise_from_outside() {
        let mesh = generate_sphere_mesh(1.0, 8, 4);
        for tri in mesh.chunks_exact(3) {
            let (a, b, c) = (tri[0].position, tri[1].position, tri[2].position);
            let e1 = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let e2 = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let n = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            // Slivers touching the poles have near-zero area; skip them
            let n_len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            if n_len < 1e-6 {
                continue;
            }
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            let dot = n[0] * centroid[0] + n[1] * centroid[1] + n[2] * centroid[2];
            assert!(dot > 0.0, "clockwise triangle at centroid {centroid:?}");
        }
    }
}
