//! Terminal rendering for the falling-block game.
//!
//! Renders into a simple framebuffer that is then flushed to the terminal in
//! full every frame. The core keeps no dirty-region state, so neither does
//! this layer.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: maps a [`core::GameSnapshot`] into the framebuffer
//! - [`renderer`]: raw-mode terminal setup and full-frame flush

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{cell_color, GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
