//! Error type covering every failure path of the renderer.
//!
//! All initialization and runtime failures funnel into [`RenderError`], which
//! `main` maps onto the process exit status. Shader compilation and pipeline
//! creation failures carry the full driver diagnostic so it reaches the log
//! before the process exits.

/// Errors that can abort initialization or the render loop.
#[derive(Debug)]
pub enum RenderError {
    /// The winit event loop could not be created or exited abnormally.
    EventLoop(winit::error::EventLoopError),
    /// The window could not be created.
    Window(winit::error::OsError),
    /// The rendering surface could not be created for the window.
    CreateSurface(wgpu::CreateSurfaceError),
    /// No suitable GPU adapter was found.
    RequestAdapter(wgpu::RequestAdapterError),
    /// The logical device could not be created on the chosen adapter.
    RequestDevice(wgpu::RequestDeviceError),
    /// The WGSL shader module failed validation. Carries the diagnostic log.
    ShaderCompile(String),
    /// The render pipeline failed validation against the compiled shader.
    /// Carries the diagnostic log.
    PipelineCreation(String),
    /// The surface was lost in a way reconfiguration cannot recover from.
    Surface(wgpu::SurfaceError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::EventLoop(e) => write!(f, "event loop error: {}", e),
            RenderError::Window(e) => write!(f, "window creation failed: {}", e),
            RenderError::CreateSurface(e) => write!(f, "surface creation failed: {}", e),
            RenderError::RequestAdapter(e) => write!(f, "no suitable GPU adapter: {}", e),
            RenderError::RequestDevice(e) => write!(f, "device creation failed: {}", e),
            RenderError::ShaderCompile(log) => write!(f, "shader compilation failed: {}", log),
            RenderError::PipelineCreation(log) => {
                write!(f, "render pipeline creation failed: {}", log)
            }
            RenderError::Surface(e) => write!(f, "unrecoverable surface error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::EventLoop(e) => Some(e),
            RenderError::Window(e) => Some(e),
            RenderError::CreateSurface(e) => Some(e),
            RenderError::RequestAdapter(e) => Some(e),
            RenderError::RequestDevice(e) => Some(e),
            RenderError::Surface(e) => Some(e),
            _ => None,
        }
    }
}

impl From<winit::error::EventLoopError> for RenderError {
    fn from(e: winit::error::EventLoopError) -> Self {
        RenderError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for RenderError {
    fn from(e: winit::error::OsError) -> Self {
        RenderError::Window(e)
    }
}

impl From<wgpu::CreateSurfaceError> for RenderError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        RenderError::CreateSurface(e)
    }
}

impl From<wgpu::RequestAdapterError> for RenderError {
    fn from(e: wgpu::RequestAdapterError) -> Self {
        RenderError::RequestAdapter(e)
    }
}

impl From<wgpu::RequestDeviceError> for RenderError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        RenderError::RequestDevice(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shader_compile_error_preserves_diagnostic() {
        let err = RenderError::ShaderCompile("unknown identifier 'frag'".to_string());
        let message = err.to_string();
        assert!(message.contains("shader compilation failed"));
        assert!(message.contains("unknown identifier 'frag'"));
    }

    #[test]
    fn pipeline_error_preserves_diagnostic() {
        let err = RenderError::PipelineCreation("entry point 'fs' not found".to_string());
        assert!(err.to_string().contains("entry point 'fs' not found"));
    }
}
