use std::mem::size_of;

use glam::Vec3;

const POS_ATTRIB_INDEX: u32 = 0;
const COLOR_ATTRIB_INDEX: u32 = 1;

/// A single vertex as it is laid out in the vertex buffer
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
}

impl Vertex {
    pub fn new(position: Vec3, color: Vec3) -> Self {
        Self { position, color }
    }
}

/// Two triangles meeting at the origin, colors cycling red/green/blue
pub fn triangle_vertices() -> [Vertex; 6] {
    [
        Vertex::new(Vec3::new(-0.5, -1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
        Vertex::new(Vec3::new(0.5, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
        Vertex::new(Vec3::new(0.5, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0)),
        Vertex::new(Vec3::new(-0.5, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        Vertex::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0)),
    ]
}

pub struct TriangleMesh {
    vao: u32,
    vbo: u32,
    vertex_count: i32,
}

impl TriangleMesh {
    pub fn upload(vertices: &[Vertex]) -> Self {
        let mut vao = 0;
        let mut vbo = 0;

        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);

            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            let buffer_size = vertices.len() * size_of::<Vertex>();
            gl::BufferData(
                gl::ARRAY_BUFFER,
                buffer_size as isize,
                vertices.as_ptr() as _,
                gl::STATIC_DRAW,
            );

            let stride = size_of::<Vertex>() as i32;

            gl::VertexAttribPointer(POS_ATTRIB_INDEX, 3, gl::FLOAT, gl::FALSE, stride, 0 as _);
            gl::EnableVertexAttribArray(POS_ATTRIB_INDEX);

            gl::VertexAttribPointer(
                COLOR_ATTRIB_INDEX,
                3,
                gl::FLOAT,
                gl::FALSE,
                stride,
                size_of::<Vec3>() as _,
            );
            gl::EnableVertexAttribArray(COLOR_ATTRIB_INDEX);

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);
        }

        Self {
            vao,
            vbo,
            vertex_count: vertices.len() as i32,
        }
    }

    pub fn draw(&self) {
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, self.vertex_count);
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for TriangleMesh {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.vao);
            gl::DeleteBuffers(1, &self.vbo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_matches_attrib_pointers() {
        // Interleaved position + color, 3 floats each
        assert_eq!(size_of::<Vertex>(), 6 * size_of::<f32>());

        let v = Vertex::new(Vec3::ZERO, Vec3::ZERO);
        let base = &v as *const Vertex as usize;
        let color = &v.color as *const Vec3 as usize;
        assert_eq!(color - base, size_of::<Vec3>());
    }

    #[test]
    fn triangles_share_the_apex() {
        let verts = triangle_vertices();

        assert_eq!(verts.len(), 6);
        assert_eq!(verts[2].position, Vec3::ZERO);
        assert_eq!(verts[5].position, Vec3::ZERO);

        // The two bases mirror each other through the origin
        assert_eq!(verts[0].position, -verts[3].position);
        assert_eq!(verts[1].position, -verts[4].position);
    }

    #[test]
    fn colors_are_saturated_primaries() {
        for v in triangle_vertices() {
            assert_eq!(v.color.min_element(), 0.0);
            assert_eq!(v.color.max_element(), 1.0);
        }
    }
}
