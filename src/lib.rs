//! # Cumulus
//!
//! **Animated procedural clouds on a full-screen quad.**
//!
//! One window, one static quad, one shader pair: the fragment stage sums
//! three drifting octaves of lattice value noise, thresholds the result, and
//! blends between a cloud and a sky color. A single scalar advances each
//! frame to drive the drift; there is nothing else to configure.
//!
//! ```no_run
//! fn main() -> std::process::ExitCode {
//!     env_logger::init();
//!     match cumulus::run() {
//!         Ok(()) => std::process::ExitCode::SUCCESS,
//!         Err(e) => {
//!             log::error!("{e}");
//!             std::process::ExitCode::FAILURE
//!         }
//!     }
//! }
//! ```
//!
//! The shader lives in `src/shaders/clouds.wgsl` as a compiled-in constant;
//! [`noise`] mirrors its math on the CPU so the per-pixel function can be
//! regression-tested without a GPU.

mod animation;
mod app;
mod cloud_pass;
mod error;
mod gpu;
pub mod noise;
mod quad;
mod state;

pub use animation::{CLOUD_SHIFT_STEP, CloudShift};
pub use app::{WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH, run};
pub use cloud_pass::{CloudPass, SHADER_SOURCE};
pub use error::RenderError;
pub use gpu::GpuContext;
pub use quad::{FULLSCREEN_QUAD, QuadVertex};
pub use state::Lifecycle;
