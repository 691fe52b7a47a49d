//! Vertex types for mesh generation

use bytemuck::{Pod, Zeroable};

/// Position + color vertex, laid out for direct GPU upload
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, z: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y, z],
            color,
        }
    }
}

/// Colors for match elements
pub mod colors {
    pub const FIELD_GREEN: [f32; 4] = [0.0, 0.6, 0.0, 1.0];
    pub const LINE_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL_WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const TEAM_RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const TEAM_BLUE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
}
