use fltk::{
    app::Sender,
    button::Button,
    enums::Color,
    frame::Frame,
    group::Flex,
    menu::MenuBar,
    prelude::*,
    window::Window,
};

use super::grid_view::GridView;
use crate::app::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub source_label: Frame,
    pub select_button: Button,
    pub extract_button: Button,
    pub save_button: Button,
    pub grid: GridView,
    pub total_label: Frame,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 960, 540, "CodeSieve");
    wind.set_xclass("CodeSieve");

    let mut flex = Flex::new(0, 0, 960, 540, None);
    flex.set_type(fltk::group::FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let mut content = Flex::default();
    content.set_type(fltk::group::FlexType::Row);
    content.set_margin(12);
    content.set_spacing(16);

    // Left pane: file selection and actions
    let mut actions = Flex::default();
    actions.set_type(fltk::group::FlexType::Column);
    actions.set_spacing(8);

    let mut title = Frame::default().with_label("Attach a text file");
    title.set_label_size(20);
    actions.fixed(&title, 36);

    let mut subtitle = Frame::default().with_label("Extract its codes into a spreadsheet");
    subtitle.set_label_size(12);
    subtitle.set_label_color(Color::from_rgb(100, 100, 100));
    actions.fixed(&subtitle, 20);

    let mut source_label = Frame::default().with_label("No file selected");
    source_label.set_label_size(12);
    actions.fixed(&source_label, 24);

    let mut select_button = Button::default().with_label("Select File...");
    select_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::SelectFile)
    });
    actions.fixed(&select_button, 34);

    let mut extract_button = Button::default().with_label("Extract Codes");
    extract_button.deactivate();
    extract_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::ExtractCodes)
    });
    actions.fixed(&extract_button, 34);

    let mut save_button = Button::default().with_label("Save Spreadsheet...");
    save_button.deactivate();
    save_button.set_callback({
        let s = *sender;
        move |_| s.send(Message::SaveSpreadsheet)
    });
    actions.fixed(&save_button, 34);

    // Spacer soaks up the leftover height below the buttons
    Frame::default();
    actions.end();
    content.fixed(&actions, 260);

    // Right pane: the bounded preview grid
    let mut preview = Flex::default();
    preview.set_type(fltk::group::FlexType::Column);
    preview.set_spacing(8);

    let mut preview_title = Frame::default().with_label("Preview");
    preview_title.set_label_size(16);
    preview.fixed(&preview_title, 26);

    let grid = GridView::new(sender);

    let mut total_label = Frame::default().with_label("Total: 0 codes");
    total_label.set_label_size(12);
    preview.fixed(&total_label, 22);

    preview.end();
    content.end();
    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        source_label,
        select_button,
        extract_button,
        save_button,
        grid,
        total_label,
    }
}
