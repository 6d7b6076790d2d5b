//! View rendering for the search screen.

use iced::widget::{Column, Space, button, column, container, image, text, text_input};
use iced::{Alignment, Element, Length};

use super::AlbumArtFinder;
use crate::artwork::traits::HttpTransport;
use super::messages::Message;
use super::state::SearchPhase;
use super::theme::{self, color, layout, spacing, typography};

/// ASCII spinner frames for the loading indicator
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Current spinner frame
fn spinner_frame(tick: u32) -> char {
    SPINNER[tick as usize % SPINNER.len()]
}

/// Header, artwork, input and Search button, centered on the screen
pub fn search_screen<T: HttpTransport>(app: &AlbumArtFinder<T>) -> Element<'_, Message> {
    let header = text("Album Artwork Finder")
        .size(typography::SIZE_HEADER)
        .color(color::SURFACE_LIGHT);

    let input = text_input("Search for an album", app.screen.query())
        .on_input(Message::QueryChanged)
        .on_submit(Message::SearchPressed)
        .padding(spacing::SM)
        .size(typography::SIZE_BODY)
        .width(Length::Fixed(layout::INPUT_WIDTH))
        .style(theme::search_input);

    // Disabled until a key is configured
    let search = button(
        container(text("Search").size(typography::SIZE_BODY))
            .width(Length::Fill)
            .align_x(Alignment::Center),
    )
    .on_press_maybe(app.dispatcher.as_ref().map(|_| Message::SearchPressed))
    .padding(spacing::SM)
    .width(Length::Fixed(layout::BUTTON_WIDTH))
    .style(theme::search_button);

    let content = Column::new()
        .push(loading_indicator(app))
        .push_maybe(config_warning(app))
        .push(header)
        .push_maybe(artwork(app))
        .push(Space::with_height(spacing::XL))
        .push(input)
        .push(search)
        .push_maybe(status_line(app))
        .spacing(spacing::MD)
        .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .padding(spacing::XL)
        .style(theme::screen_background)
        .into()
}

/// Spinner while loading, an empty line of the same height otherwise
fn loading_indicator<T: HttpTransport>(app: &AlbumArtFinder<T>) -> Element<'_, Message> {
    if app.screen.is_loading() {
        text(format!("{}  Searching...", spinner_frame(app.spinner_tick)))
            .size(typography::SIZE_SMALL)
            .color(color::TEXT_MUTED)
            .into()
    } else {
        Space::with_height(typography::SIZE_SMALL).into()
    }
}

fn config_warning<T: HttpTransport>(app: &AlbumArtFinder<T>) -> Option<Element<'_, Message>> {
    let warning = app.config_warning.as_ref()?;
    Some(
        container(
            column![
                text("Searching is disabled").size(typography::SIZE_BODY),
                text(warning.as_str()).size(typography::SIZE_SMALL),
            ]
            .spacing(4),
        )
        .padding(spacing::MD)
        .style(theme::warning_banner)
        .into(),
    )
}

/// The artwork, only once its bytes have arrived
fn artwork<T: HttpTransport>(app: &AlbumArtFinder<T>) -> Option<Element<'_, Message>> {
    let loaded = app.artwork.as_ref()?;
    if app.screen.image_url() != Some(loaded.url.as_str()) {
        return None;
    }

    Some(
        image::Image::<image::Handle>::new(loaded.handle.clone())
            .width(Length::Fixed(layout::ARTWORK_SIZE))
            .height(Length::Fixed(layout::ARTWORK_SIZE))
            .into(),
    )
}

fn status_line<T: HttpTransport>(app: &AlbumArtFinder<T>) -> Option<Element<'_, Message>> {
    if let Some(error) = &app.artwork_error {
        return Some(
            text(format!("Could not load artwork: {}", error))
                .size(typography::SIZE_SMALL)
                .color(color::ERROR)
                .into(),
        );
    }

    // Loading is already shown by the spinner
    if app.screen.is_loading() {
        return None;
    }

    let status = app.screen.status_line()?;
    let tint = match app.screen.phase() {
        SearchPhase::Failed { .. } => color::ERROR,
        _ => color::TEXT_MUTED,
    };
    Some(
        text(status)
            .size(typography::SIZE_SMALL)
            .color(tint)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), '|');
        assert_eq!(spinner_frame(1), '/');
        assert_eq!(spinner_frame(4), '|');
    }
}
