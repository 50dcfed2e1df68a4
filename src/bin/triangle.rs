//! The embedded-source variant: the GLSL lives in this file as string
//! constants, so the binary runs from any working directory.

use eyre::Result;

use hello_triangle::geometry::{triangle_vertices, TriangleMesh};
use hello_triangle::ogl;
use hello_triangle::renderer::Renderer;
use hello_triangle::shader::Shader;
use hello_triangle::window::Window;

const VERTEX_SRC: &str = "#version 330 core
layout (location = 0) in vec3 position;
layout (location = 1) in vec3 aColor;

out vec3 color;

void main() {
    gl_Position = vec4(position, 1.0);
    color = aColor;
}
";

const FRAGMENT_SRC: &str = "#version 330 core
in vec3 color;

out vec4 FragColor;

void main() {
    FragColor = vec4(color, 1.0);
}
";

fn main() -> Result<()> {
    env_logger::init();

    let mut window = Window::new("Triangle", (800, 600))?;
    ogl::init_debug();
    ogl::log_context_info();

    let shader = Shader::from_source(VERTEX_SRC, FRAGMENT_SRC)?;
    let mesh = TriangleMesh::upload(&triangle_vertices());
    let renderer = Renderer::new(shader);

    'render_loop: loop {
        if window.handle_events() {
            break 'render_loop;
        }

        renderer.render(&mesh);
        window.swap();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_sources_target_the_core_profile() {
        assert!(VERTEX_SRC.starts_with("#version 330 core"));
        assert!(FRAGMENT_SRC.starts_with("#version 330 core"));

        // Sources are null-terminated before the handoff to GL
        assert!(!VERTEX_SRC.contains('\0'));
        assert!(!FRAGMENT_SRC.contains('\0'));
    }

    #[test]
    fn attribute_locations_match_the_vertex_layout() {
        assert!(VERTEX_SRC.contains("layout (location = 0) in vec3 position;"));
        assert!(VERTEX_SRC.contains("layout (location = 1) in vec3 aColor;"));
    }
}
