use eyre::{eyre, Result};
use sdl2::{
    event::{Event, WindowEvent},
    video::{GLContext, GLProfile, SwapInterval},
    EventPump, Sdl, VideoSubsystem,
};

pub struct Window {
    _sdl_context: Sdl,
    _video_subsystem: VideoSubsystem,
    window: sdl2::video::Window,
    _gl_ctx: GLContext,
    pub event_pump: EventPump,
}

impl Window {
    pub fn new(title: &str, dim: (u32, u32)) -> Result<Self> {
        let sdl_context = sdl2::init().map_err(|e| eyre!("{e}"))?;
        let video_subsystem = sdl_context.video().map_err(|e| eyre!("{e}"))?;

        // Context attributes must be in place before the window exists
        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_version(3, 3);
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_double_buffer(true);

        let window = video_subsystem
            .window(title, dim.0, dim.1)
            .opengl()
            .resizable()
            .position_centered()
            .allow_highdpi()
            .build()?;

        let gl_ctx = window.gl_create_context().map_err(|e| eyre!("{e}"))?;
        gl::load_with(|symbol| video_subsystem.gl_get_proc_address(symbol) as *const _);

        window
            .subsystem()
            .gl_set_swap_interval(SwapInterval::VSync)
            .map_err(|e| eyre!("{e}"))?;

        // The drawable size differs from the window size on high-DPI outputs
        let (width, height) = window.drawable_size();
        unsafe {
            gl::Viewport(0, 0, width as i32, height as i32);
        }

        let event_pump = sdl_context.event_pump().map_err(|e| eyre!("{e}"))?;

        Ok(Self {
            _sdl_context: sdl_context,
            _video_subsystem: video_subsystem,
            window,
            _gl_ctx: gl_ctx,
            event_pump,
        })
    }

    /// Drains pending events and returns whether the render loop should terminate
    pub fn handle_events(&mut self) -> bool {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => return true,
                Event::Window {
                    win_event: WindowEvent::SizeChanged(..),
                    ..
                } => {
                    let (width, height) = self.window.drawable_size();
                    unsafe {
                        gl::Viewport(0, 0, width as i32, height as i32);
                    }
                }
                _ => (),
            }
        }

        false
    }

    pub fn swap(&self) {
        self.window.gl_swap_window();
    }
}
