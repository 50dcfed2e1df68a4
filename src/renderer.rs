use crate::{geometry::TriangleMesh, shader::Shader};

pub struct Renderer {
    shader: Shader,
}

impl Renderer {
    pub fn new(shader: Shader) -> Self {
        Self { shader }
    }

    /// Clears the color buffer and draws the mesh with the owned program.
    /// The scene is flat, so no depth test or culling is set up.
    pub fn render(&self, mesh: &TriangleMesh) {
        unsafe {
            gl::ClearColor(0.2, 0.3, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            gl::UseProgram(self.shader.id);
        }

        mesh.draw();
    }
}
