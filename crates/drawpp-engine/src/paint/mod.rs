//! Color model and blend laws.
//!
//! Scope:
//! - color representation (linear, straight alpha)
//! - channel clamp policy applied on canvas writes
//! - compositing laws as pure `(Color, Color) -> Color` functions
//!
//! Every canvas write path reduces to one of these functions; there is no
//! shared state.

pub mod blend;
pub mod color;

pub use blend::{blend, blend_over, BlendMode, Blender};
pub use color::{ChannelClamp, Color};
