//! The file-loading variant: identical to `triangle` except that the GLSL is
//! read from `shaders/` relative to the working directory.

use eyre::Result;

use hello_triangle::geometry::{triangle_vertices, TriangleMesh};
use hello_triangle::ogl;
use hello_triangle::renderer::Renderer;
use hello_triangle::shader::Shader;
use hello_triangle::window::Window;

const VERTEX_PATH: &str = "shaders/triangle.vert";
const FRAGMENT_PATH: &str = "shaders/triangle.frag";

fn main() -> Result<()> {
    env_logger::init();

    let mut window = Window::new("Triangle", (800, 600))?;
    ogl::init_debug();
    ogl::log_context_info();

    let shader = Shader::from_file(VERTEX_PATH, FRAGMENT_PATH)?;
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
    fn shader_files_are_present_and_target_the_core_profile() {
        let manifest_dir = env!("CARGO_MANIFEST_DIR");

        let vs = std::fs::read_to_string(format!("{manifest_dir}/{VERTEX_PATH}")).unwrap();
        let fs = std::fs::read_to_string(format!("{manifest_dir}/{FRAGMENT_PATH}")).unwrap();

        assert!(vs.starts_with("#version 330 core"));
        assert!(fs.starts_with("#version 330 core"));
    }
}
