use iced::font::Weight;
use iced::widget::{button, column, container, image, text};
use iced::{Alignment, Element, Font, Length};

use crate::core::models::{PreviewBitmap, StatusState};
use crate::global_constants::{
    CONTENT_PADDING, CONTENT_SPACING, HEADER_TITLE, PASTE_BUTTON_HEIGHT, PASTE_BUTTON_LABEL,
    PREVIEW_FRAME_HEIGHT, PREVIEW_FRAME_PADDING, PREVIEW_PLACEHOLDER,
};
use crate::ports::PasteTrigger;
use crate::presentation::app_theme;

const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub struct PasteWindowView;

impl PasteWindowView {
    pub fn render_ui<'a>(
        status: &'a StatusState,
        preview: Option<&'a PreviewBitmap>,
    ) -> Element<'a, PasteTrigger> {
        let title = text(HEADER_TITLE)
            .size(20)
            .font(BOLD)
            .color(app_theme::TITLE_TEXT);

        let status_line = text(status.to_string())
            .size(12)
            .color(app_theme::status_text_color(status));

        let paste_btn = button(
            container(text(PASTE_BUTTON_LABEL).size(14).font(BOLD))
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fixed(PASTE_BUTTON_HEIGHT))
        .style(app_theme::paste_button_style)
        .on_press(PasteTrigger::Button);

        let preview_frame = container(Self::render_preview(preview))
            .padding(PREVIEW_FRAME_PADDING)
            .center_x(Length::Fill)
            .center_y(Length::Fixed(PREVIEW_FRAME_HEIGHT))
            .style(app_theme::preview_frame_style);

        let content = column![title, status_line, paste_btn, preview_frame]
            .spacing(CONTENT_SPACING)
            .padding(CONTENT_PADDING)
            .width(Length::Fill)
            .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(app_theme::window_background_style)
            .into()
    }

    fn render_preview(preview: Option<&PreviewBitmap>) -> Element<'_, PasteTrigger> {
        match preview {
            Some(bitmap) => image(bitmap.handle.clone())
                .width(Length::Fixed(bitmap.width as f32))
                .height(Length::Fixed(bitmap.height as f32))
                .into(),
            None => text(PREVIEW_PLACEHOLDER)
                .color(app_theme::PLACEHOLDER_TEXT)
                .into(),
        }
    }
}
