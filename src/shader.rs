use eyre::{eyre, Context, Result};
use gl::types::GLenum;
use std::{fs, ptr};

/// Represents a linked OpenGL shader program
#[derive(Debug)]
pub struct Shader {
    pub id: u32,
}

impl Shader {
    pub fn from_source(vs_src: &str, fs_src: &str) -> Result<Shader> {
        let mut vs_src = vs_src.as_bytes().to_vec();
        let mut fs_src = fs_src.as_bytes().to_vec();

        // Add null-terminators
        vs_src.push(b'\0');
        fs_src.push(b'\0');

        let vs = Self::compile_shader(&vs_src, gl::VERTEX_SHADER)?;
        let fs = Self::compile_shader(&fs_src, gl::FRAGMENT_SHADER)?;
        let shader_program = Self::link_shaders(vs, fs)?;
        Ok(Shader { id: shader_program })
    }

    pub fn from_file(vs_path: &str, fs_path: &str) -> Result<Shader> {
        let vs_src =
            fs::read_to_string(vs_path).wrap_err("Couldn't load the vertex shader file")?;
        let fs_src =
            fs::read_to_string(fs_path).wrap_err("Couldn't load the fragment shader file")?;

        Self::from_source(&vs_src, &fs_src)
    }

    fn compile_shader(src: &[u8], typ: GLenum) -> Result<u32> {
        unsafe {
            let shader = gl::CreateShader(typ);
            gl::ShaderSource(shader, 1, &(src.as_ptr() as _), ptr::null_mut());
            gl::CompileShader(shader);

            let mut res = 0;
            gl::GetShaderiv(shader, gl::COMPILE_STATUS, &mut res);

            if res == 0 {
                let mut info_log = [0u8; 512];
                let mut info_len = 0;
                gl::GetShaderInfoLog(shader, 512, &mut info_len, info_log.as_mut_ptr() as _);
                let info_msg = String::from_utf8_lossy(&info_log[..info_len as usize]);
                return Err(eyre!("Failed to compile a shader: '{}'", info_msg));
            }

            Ok(shader)
        }
    }

    fn link_shaders(vs: u32, fs: u32) -> Result<u32> {
        unsafe {
            let shader_program = gl::CreateProgram();
            gl::AttachShader(shader_program, vs);
            gl::AttachShader(shader_program, fs);
            gl::LinkProgram(shader_program);

            let mut res = 0;
            gl::GetProgramiv(shader_program, gl::LINK_STATUS, &mut res);

            if res == 0 {
                let mut info_log = [0u8; 512];
                let mut info_len = 0;
                gl::GetProgramInfoLog(
                    shader_program,
                    512,
                    &mut info_len,
                    info_log.as_mut_ptr() as *mut i8,
                );
                let info_msg = String::from_utf8_lossy(&info_log[..info_len as usize]);
                return Err(eyre!("Failed to create a shader program: '{}'", info_msg));
            }

            gl::DeleteShader(vs);
            gl::DeleteShader(fs);

            Ok(shader_program)
        }
    }
}

impl Drop for Shader {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_shader_files_fail_before_any_gl_call() {
        let err = Shader::from_file("no/such.vert", "no/such.frag").unwrap_err();
        assert!(format!("{err}").contains("vertex shader"));

        let vs_path = concat!(env!("CARGO_MANIFEST_DIR"), "/shaders/triangle.vert");
        let err = Shader::from_file(vs_path, "no/such.frag").unwrap_err();
        assert!(format!("{err}").contains("fragment shader"));
    }
}
