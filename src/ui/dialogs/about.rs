use fltk::{
    button::Button,
    enums::{Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::extractor::MIN_CODE_LEN;

/// Show About dialog
pub fn show_about_dialog() {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(420, 260)
        .with_label("About CodeSieve")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 240, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("CodeSieve");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&format!("Version {}", version));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label("Sifts voucher codes out of text files into a spreadsheet");
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&desc_frame, 25);

    let mut info_frame = Frame::default();
    info_frame.set_label(&format!(
        "Codes are uppercase letters and digits,\n\
         at least {} characters long.\n\
         Click a cell in the preview to remove a code.",
        MIN_CODE_LEN
    ));
    info_frame.set_label_size(12);

    let mut close_btn = Button::default().with_label("Close");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();
    dialog.show();

    let dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    super::run_dialog(&dialog);
}
