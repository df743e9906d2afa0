//! Avatar creation dialog: per-chat sessions, palettes, keyboards, commands and the manager
//! that drives them.

mod action;
mod command;
mod filename;
mod keyboard;
mod manager;
pub mod messages;
mod palette;
mod queue;
mod session;
mod store;

pub use action::{CallbackAction, ColorMethod};
pub use command::{parse_command, Command};
pub use filename::{export_file_name, SVG_MIME};
pub use keyboard::{color_method_keyboard, custom_colors_keyboard, preview_keyboard, style_keyboard};
pub use manager::{DialogManager, DEFAULT_AVATAR_SIZE, DEFAULT_PALETTE_SIZE};
pub use palette::{Palette, DEFAULT_COLORS};
pub use queue::ChatQueues;
pub use session::{DialogState, RenderedAvatar, Session, Step};
pub use store::SessionStore;
