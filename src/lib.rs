/// Interleaved vertex data and the GPU buffers holding it.
pub mod geometry;

/// OpenGL debug output and context information.
pub mod ogl;

pub mod renderer;

/// Abstraction for working with OpenGL Shaders.
pub mod shader;

/// SDL2 window with an OpenGL core-profile context.
pub mod window;
