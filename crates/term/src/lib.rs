//! Terminal rendering layer.
//!
//! Snapshots are drawn into a plain framebuffer ([`fb`]) by [`GameView`] and
//! flushed to the terminal by [`TerminalRenderer`], which re-sends only the
//! cells that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockdrop_core as core;
pub use blockdrop_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
