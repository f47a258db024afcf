//! FLTK chrome: windows, menus, dialogs, and the preview grid widget.

pub mod dialogs;
pub mod file_dialogs;
pub mod grid_view;
pub mod main_window;
pub mod menu;
pub mod theme;
