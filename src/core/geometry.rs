use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterate triangles as position triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Vec3; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |t| {
            [
                Vec3::from(self.vertices[t[0] as usize].position),
                Vec3::from(self.vertices[t[1] as usize].position),
                Vec3::from(self.vertices[t[2] as usize].position),
            ]
        })
    }
}

// Two triangles per grid cell, rows of `columns + 1` vertices.
fn grid_indices(columns: u32, rows: u32) -> Vec<u32> {
    let stride = columns + 1;
    let mut indices = Vec::with_capacity((columns * rows * 6) as usize);
    for iy in 0..rows {
        for ix in 0..columns {
            let a = ix + stride * iy;
            let b = ix + stride * (iy + 1);
            let c = ix + 1 + stride * (iy + 1);
            let d = ix + 1 + stride * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    indices
}

/// Flat plane in XY facing +Z, centred on the origin.
pub fn plane(width: f32, height: f32, columns: u32, rows: u32) -> MeshData {
    let columns = columns.max(1);
    let rows = rows.max(1);
    let mut vertices = Vec::with_capacity(((columns + 1) * (rows + 1)) as usize);
    for iy in 0..=rows {
        let y = height * 0.5 - iy as f32 * height / rows as f32;
        for ix in 0..=columns {
            let x = ix as f32 * width / columns as f32 - width * 0.5;
            vertices.push(Vertex {
                position: [x, y, 0.0],
                uv: [ix as f32 / columns as f32, 1.0 - iy as f32 / rows as f32],
            });
        }
    }
    MeshData {
        vertices,
        indices: grid_indices(columns, rows),
    }
}

/// Plane whose width is wrapped onto a circular arc of sagitta `bend`.
///
/// The arc runs through `(-w/2, 0)`, `(0, bend)` and `(w/2, 0)` (2D, `y`
/// mapped to `-z`), so the middle of the card bulges toward -Z.
pub fn bent_plane(bend: f32, width: f32, height: f32, columns: u32, rows: u32) -> MeshData {
    let mut mesh = plane(width, height, columns, rows);
    if bend.abs() <= f32::EPSILON {
        return mesh;
    }
    let hw = width * 0.5;
    let a = Vec2::new(-hw, 0.0);
    let b = Vec2::new(0.0, bend);
    let c = Vec2::new(hw, 0.0);
    let ab = a - b;
    let bc = b - c;
    let ac = a - c;
    // Circumradius of the three arc points.
    let r = (ab.length() * bc.length() * ac.length()) / (2.0 * ab.perp_dot(ac).abs());
    let center = Vec2::new(0.0, bend - r);
    let base = a - center;
    let base_angle = base.y.atan2(base.x) - std::f32::consts::FRAC_PI_2;
    let arc = base_angle * 2.0;
    for v in &mut mesh.vertices {
        let ratio = 1.0 - v.uv[0];
        let p = Vec2::from_angle(arc * ratio).rotate(c - center) + center;
        v.position = [p.x, v.position[1], -p.y];
    }
    mesh
}

/// Open-ended cylinder around +Y, centred on the origin.
pub fn open_cylinder(radius: f32, height: f32, radial_segments: u32, height_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let rows = height_segments.max(1);
    let half = height * 0.5;
    let mut vertices = Vec::with_capacity(((radial + 1) * (rows + 1)) as usize);
    for iy in 0..=rows {
        let v = iy as f32 / rows as f32;
        for ix in 0..=radial {
            let u = ix as f32 / radial as f32;
            let theta = u * TAU;
            vertices.push(Vertex {
                position: [radius * theta.sin(), half - v * height, radius * theta.cos()],
                uv: [u, 1.0 - v],
            });
        }
    }
    MeshData {
        vertices,
        indices: grid_indices(radial, rows),
    }
}
