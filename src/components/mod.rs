//! UI Components
//!
//! Reusable Leptos components.

mod board;
mod color_picker;
mod drawer_target;
mod editor_drawer;
mod note_card;
mod toast;
mod toolbar;

pub use board::{board_rect, Board};
pub use color_picker::ColorPicker;
pub use drawer_target::DrawerTarget;
pub use editor_drawer::EditorDrawer;
pub use note_card::NoteCard;
pub use toast::Toast;
pub use toolbar::Toolbar;
