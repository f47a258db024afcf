use fltk::{
    app::Sender,
    button::Button,
    enums::{Color, FrameType},
    group::Flex,
    prelude::*,
};

use crate::app::grid::{GRID_COLS, GRID_ROWS, cell_at, cell_index};
use crate::app::messages::Message;

/// The bounded preview surface: a fixed grid of buttons filled column-major
/// from the code list. Clicking a populated cell asks the dispatch loop to
/// remove that value everywhere; cells past the end of the list are empty
/// placeholders and stay inactive.
pub struct GridView {
    pub container: Flex,
    cells: Vec<Button>,
}

impl GridView {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut container = Flex::default_fill();
        container.set_type(fltk::group::FlexType::Row);
        container.set_spacing(4);

        let mut cells = Vec::with_capacity(GRID_ROWS * GRID_COLS);
        for _col in 0..GRID_COLS {
            let mut column = Flex::default();
            column.set_type(fltk::group::FlexType::Column);
            column.set_spacing(4);
            for _row in 0..GRID_ROWS {
                let mut cell = Button::default();
                cell.set_frame(FrameType::ThinUpBox);
                cell.set_label_size(13);
                cell.set_tooltip("Click to remove every occurrence of this code");
                cell.deactivate();
                cell.set_callback({
                    let s = *sender;
                    move |b| {
                        let value = b.label();
                        if !value.is_empty() {
                            s.send(Message::RemoveCode(value));
                        }
                    }
                });
                cells.push(cell);
            }
            column.end();
        }
        container.end();

        Self { container, cells }
    }

    /// Recompute every cell from the current list.
    pub fn refresh(&mut self, codes: &[String]) {
        for col in 0..GRID_COLS {
            for row in 0..GRID_ROWS {
                let cell = &mut self.cells[cell_index(row, col)];
                match cell_at(codes, row, col) {
                    Some(code) => {
                        cell.set_label(code);
                        cell.activate();
                    }
                    None => {
                        cell.set_label("");
                        cell.deactivate();
                    }
                }
            }
        }
        self.container.redraw();
    }

    pub fn set_label_size(&mut self, size: i32) {
        for cell in &mut self.cells {
            cell.set_label_size(size);
        }
        self.container.redraw();
    }

    pub fn apply_theme(&mut self, is_dark: bool) {
        let (cell_bg, cell_fg) = if is_dark {
            (Color::from_rgb(45, 45, 45), Color::from_rgb(220, 220, 220))
        } else {
            (Color::from_rgb(250, 250, 250), Color::Black)
        };
        for cell in &mut self.cells {
            cell.set_color(cell_bg);
            cell.set_label_color(cell_fg);
        }
        self.container.redraw();
    }
}
