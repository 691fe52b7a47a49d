//! Startup mesh generation
//!
//! Geometry is built once at startup and uploaded by the backend; nothing
//! here runs per frame. The parametrization is fixed: cube as 24 vertices /
//! 6 faces, sphere as an 18x36 lat/long grid, field markings as 40-segment
//! polylines.

use std::f32::consts::PI;

use crate::config::Field;

use super::vertex::{Vertex, colors};

/// Segment count for the border ellipse and the center circle
const MARKING_SEGMENTS: u32 = 40;
/// Center circle radius (world units)
const CENTER_CIRCLE_RADIUS: f32 = 3.0;
/// Markings float this far above the grass to avoid z-fighting
const MARKING_LIFT: f32 = 0.01;

/// Indexed triangle mesh
#[derive(Debug, Clone)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

/// The field mesh carries two topologies: the grass quad as triangles and
/// the white markings as a line list
#[derive(Debug, Clone)]
pub struct FieldMesh {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<u32>,
    pub lines: Vec<u32>,
}

/// Axis-aligned cube, 24 vertices so each face can carry its own winding
pub fn cube(size: f32, color: [f32; 4]) -> MeshData {
    let s = size / 2.0;
    let vertices = vec![
        // Front face
        Vertex::new(-s, -s, s, color),
        Vertex::new(s, -s, s, color),
        Vertex::new(s, s, s, color),
        Vertex::new(-s, s, s, color),
        // Back face
        Vertex::new(-s, -s, -s, color),
        Vertex::new(-s, s, -s, color),
        Vertex::new(s, s, -s, color),
        Vertex::new(s, -s, -s, color),
        // Top face
        Vertex::new(-s, s, -s, color),
        Vertex::new(-s, s, s, color),
        Vertex::new(s, s, s, color),
        Vertex::new(s, s, -s, color),
        // Bottom face
        Vertex::new(-s, -s, -s, color),
        Vertex::new(s, -s, -s, color),
        Vertex::new(s, -s, s, color),
        Vertex::new(-s, -s, s, color),
        // Right face
        Vertex::new(s, -s, -s, color),
        Vertex::new(s, s, -s, color),
        Vertex::new(s, s, s, color),
        Vertex::new(s, -s, s, color),
        // Left face
        Vertex::new(-s, -s, -s, color),
        Vertex::new(-s, -s, s, color),
        Vertex::new(-s, s, s, color),
        Vertex::new(-s, s, -s, color),
    ];

    let mut indices = Vec::with_capacity(36);
    for face in 0..6u32 {
        let base = face * 4;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
    }

    MeshData { vertices, indices }
}

/// UV sphere as a stacks x sectors lat/long grid
///
/// Each grid quad becomes two triangles, except the pole rows which
/// degenerate to one.
pub fn sphere(radius: f32, color: [f32; 4], sectors: u32, stacks: u32) -> MeshData {
    let sector_step = 2.0 * PI / sectors as f32;
    let stack_step = PI / stacks as f32;

    let mut vertices = Vec::with_capacity(((stacks + 1) * (sectors + 1)) as usize);
    for i in 0..=stacks {
        let stack_angle = PI / 2.0 - i as f32 * stack_step;
        let ring = radius * stack_angle.cos();
        let z = radius * stack_angle.sin();
        for j in 0..=sectors {
            let sector_angle = j as f32 * sector_step;
            vertices.push(Vertex::new(
                ring * sector_angle.cos(),
                ring * sector_angle.sin(),
                z,
                color,
            ));
        }
    }

    let mut indices = Vec::new();
    for i in 0..stacks {
        let mut k1 = i * (sectors + 1);
        let mut k2 = k1 + sectors + 1;
        for _ in 0..sectors {
            if i != 0 {
                indices.extend_from_slice(&[k1, k2, k1 + 1]);
            }
            if i != stacks - 1 {
                indices.extend_from_slice(&[k1 + 1, k2, k2 + 1]);
            }
            k1 += 1;
            k2 += 1;
        }
    }

    MeshData { vertices, indices }
}

/// Grass quad plus white markings: border ellipse, center line, center
/// circle
pub fn field(field: &Field) -> FieldMesh {
    let w = field.half_width();
    let h = field.half_height();

    let mut vertices = vec![
        Vertex::new(-w, 0.0, -h, colors::FIELD_GREEN),
        Vertex::new(w, 0.0, -h, colors::FIELD_GREEN),
        Vertex::new(w, 0.0, h, colors::FIELD_GREEN),
        Vertex::new(-w, 0.0, h, colors::FIELD_GREEN),
    ];
    let triangles = vec![0, 1, 2, 2, 3, 0];
    let mut lines = Vec::new();

    // Border ellipse through the touchlines
    let border_base = vertices.len() as u32;
    push_ring(&mut vertices, &mut lines, border_base, |angle| {
        (w * angle.cos(), h * angle.sin())
    });

    // Halfway line
    let line_base = vertices.len() as u32;
    vertices.push(Vertex::new(0.0, MARKING_LIFT, -h, colors::LINE_WHITE));
    vertices.push(Vertex::new(0.0, MARKING_LIFT, h, colors::LINE_WHITE));
    lines.extend_from_slice(&[line_base, line_base + 1]);

    // Center circle
    let circle_base = vertices.len() as u32;
    push_ring(&mut vertices, &mut lines, circle_base, |angle| {
        (
            CENTER_CIRCLE_RADIUS * angle.cos(),
            CENTER_CIRCLE_RADIUS * angle.sin(),
        )
    });

    FieldMesh {
        vertices,
        triangles,
        lines,
    }
}

/// Closed 40-segment polyline on the marking plane
fn push_ring<F: Fn(f32) -> (f32, f32)>(
    vertices: &mut Vec<Vertex>,
    lines: &mut Vec<u32>,
    base: u32,
    point: F,
) {
    for i in 0..MARKING_SEGMENTS {
        let angle = i as f32 * 2.0 * PI / MARKING_SEGMENTS as f32;
        let (x, z) = point(angle);
        vertices.push(Vertex::new(x, MARKING_LIFT, z, colors::LINE_WHITE));
    }
    for i in 0..MARKING_SEGMENTS {
        lines.push(base + i);
        lines.push(base + (i + 1) % MARKING_SEGMENTS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_has_per_face_vertices() {
        let mesh = cube(1.0, colors::TEAM_RED);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.indices.len(), 36);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < 24));
        // Every corner sits on the half-extent shell
        for vertex in &mesh.vertices {
            for coord in vertex.position {
                assert_eq!(coord.abs(), 0.5);
            }
        }
    }

    #[test]
    fn test_sphere_grid_dimensions() {
        let sectors = 36;
        let stacks = 18;
        let mesh = sphere(0.3, colors::BALL_WHITE, sectors, stacks);
        assert_eq!(
            mesh.vertices.len(),
            ((stacks + 1) * (sectors + 1)) as usize
        );
        // Two triangles per quad except one at each pole row
        let expected_triangles = (stacks * sectors * 2 - 2 * sectors) as usize;
        assert_eq!(mesh.indices.len(), expected_triangles * 3);
        // All vertices on the sphere surface
        for vertex in &mesh.vertices {
            let [x, y, z] = vertex.position;
            let r = (x * x + y * y + z * z).sqrt();
            assert!((r - 0.3).abs() < 1e-5);
        }
    }

    #[test]
    fn test_field_mesh_layout() {
        let mesh = field(&Field::default());
        // 4 quad corners + border ring + halfway line + center circle
        assert_eq!(
            mesh.vertices.len(),
            4 + MARKING_SEGMENTS as usize + 2 + MARKING_SEGMENTS as usize
        );
        assert_eq!(mesh.triangles, vec![0, 1, 2, 2, 3, 0]);
        // Two closed rings plus one segment
        assert_eq!(
            mesh.lines.len(),
            (MARKING_SEGMENTS * 2 + 2 + MARKING_SEGMENTS * 2) as usize
        );
        // Markings sit just above the grass
        for vertex in &mesh.vertices[4..] {
            assert_eq!(vertex.position[1], MARKING_LIFT);
        }
    }

    #[test]
    fn test_vertex_is_pod() {
        let mesh = cube(0.5, colors::TEAM_BLUE);
        let bytes: &[u8] = bytemuck::cast_slice(&mesh.vertices);
        assert_eq!(bytes.len(), mesh.vertices.len() * std::mem::size_of::<Vertex>());
    }
}
