//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in window pixel coordinates.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

#[inline]
fn ellipse_point(center: Vec2, radii: Vec2, theta: f32) -> Vec2 {
    Vec2::new(
        center.x + radii.x * theta.cos(),
        center.y + radii.y * theta.sin(),
    )
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, radii: Vec2, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(ellipse_point(center, radii, theta1), color));
        vertices.push(Vertex::at(ellipse_point(center, radii, theta2), color));
    }

    vertices
}

/// Generate vertices for an elliptical band between two radii pairs
pub fn ellipse_ring(
    center: Vec2,
    inner_radii: Vec2,
    outer_radii: Vec2,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);
    let inner_radii = inner_radii.max(Vec2::ZERO);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        let inner1 = ellipse_point(center, inner_radii, theta1);
        let outer1 = ellipse_point(center, outer_radii, theta1);
        let inner2 = ellipse_point(center, inner_radii, theta2);
        let outer2 = ellipse_point(center, outer_radii, theta2);

        // Two triangles per segment
        vertices.push(Vertex::at(inner1, color));
        vertices.push(Vertex::at(outer1, color));
        vertices.push(Vertex::at(inner2, color));

        vertices.push(Vertex::at(inner2, color));
        vertices.push(Vertex::at(outer1, color));
        vertices.push(Vertex::at(outer2, color));
    }

    vertices
}

/// Generate vertices for an axis-aligned rectangle spanning `min`..`max`
pub fn quad(min: Vec2, max: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let a = Vertex::new(min.x, min.y, color);
    let b = Vertex::new(max.x, min.y, color);
    let c = Vertex::new(max.x, max.y, color);
    let d = Vertex::new(min.x, max.y, color);
    [a, b, c, a, c, d]
}
