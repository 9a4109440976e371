//! Window, event loop, and per-frame rendering.
//!
//! The application is a thin [`ApplicationHandler`] around the
//! [`Lifecycle`] state machine. `resumed` builds the scene (window, GPU
//! context, cloud pass) and any failure there is fatal; the redraw handler
//! draws one frame and immediately requests the next; a close request tears
//! the scene down and exits the loop.

use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::animation::CloudShift;
use crate::cloud_pass::CloudPass;
use crate::error::RenderError;
use crate::gpu::GpuContext;
use crate::state::Lifecycle;

/// Fixed window width in logical pixels.
pub const WINDOW_WIDTH: u32 = 1280;
/// Fixed window height in logical pixels.
pub const WINDOW_HEIGHT: u32 = 960;
/// Fixed window title.
pub const WINDOW_TITLE: &str = "Clouds";

/// Everything the running loop owns.
///
/// Field order is teardown order: the pass (pipeline and buffers) drops before
/// the GPU context (device, queue, surface), which drops before the window.
struct CloudScene {
    clouds: CloudPass,
    shift: CloudShift,
    gpu: GpuContext,
    window: Arc<Window>,
}

impl CloudScene {
    fn create(event_loop: &ActiveEventLoop) -> Result<Self, RenderError> {
        let attrs = WindowAttributes::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(winit::dpi::LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attrs)?);

        let gpu = GpuContext::new(window.clone())?;
        let clouds = CloudPass::new(&gpu)?;
        log::info!("initialized {}x{} surface", gpu.width(), gpu.height());

        Ok(Self {
            clouds,
            shift: CloudShift::new(),
            gpu,
            window,
        })
    }

    /// Draw one frame: clear, advance and upload the drift scalar, draw the
    /// quad, present.
    ///
    /// Transient surface loss reconfigures and skips the frame; only errors
    /// reconfiguration cannot recover from are returned.
    fn render_frame(&mut self) -> Result<(), RenderError> {
        let frame = match self.gpu.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (width, height) = (self.gpu.width(), self.gpu.height());
                self.gpu.resize(width, height);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => return Ok(()),
            Err(e) => return Err(RenderError::Surface(e)),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Cloud Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Cloud Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            let cloud_shift = self.shift.advance();
            self.clouds.render(&self.gpu, &mut render_pass, cloud_shift);
        }

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}

/// The winit application driving the render loop.
struct CloudApp {
    state: Lifecycle<CloudScene>,
    failure: Option<RenderError>,
}

impl CloudApp {
    fn new() -> Self {
        Self {
            state: Lifecycle::new(),
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: RenderError) {
        log::error!("{error}");
        if self.failure.is_none() {
            self.failure = Some(error);
        }
        self.state.shut_down();
        event_loop.exit();
    }
}

impl ApplicationHandler for CloudApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.state.is_uninitialized() {
            return;
        }

        match CloudScene::create(event_loop) {
            Ok(scene) => {
                scene.window.request_redraw();
                self.state.start(scene);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                // Release the scene (pass, GPU context, window, in that
                // order) before the event loop returns.
                self.state.shut_down();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(scene) = self.state.scene_mut() {
                    scene.gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(scene) = self.state.scene_mut() else {
                    return;
                };
                match scene.render_frame() {
                    Ok(()) => scene.window.request_redraw(),
                    Err(e) => self.fail(event_loop, e),
                }
            }
            _ => {}
        }
    }
}

/// Run the cloud renderer until the window is closed.
///
/// Returns `Ok(())` on a graceful shutdown; any initialization or fatal
/// runtime error propagates out for `main` to map onto the exit status.
pub fn run() -> Result<(), RenderError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = CloudApp::new();
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
