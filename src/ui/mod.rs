//! UI module for Album Art Finder.

mod messages;
mod state;
pub mod theme;
mod update;
mod views;

use std::sync::Arc;
use std::time::Duration;

use iced::widget::image;
use iced::{Element, Subscription, Task, time};

use crate::artwork::SearchDispatcher;
use crate::artwork::http::ReqwestTransport;
use crate::artwork::traits::HttpTransport;

pub use messages::Message;
pub use state::{ResponsePolicy, SearchPhase, SearchScreen, SearchTicket, Settlement};

/// Everything the screen needs from startup
pub struct Startup<T: HttpTransport = ReqwestTransport> {
    /// Ready dispatcher, or the configuration problem that prevented one
    pub dispatcher: Result<SearchDispatcher<T>, String>,
    /// How overlapping searches are resolved
    pub policy: ResponsePolicy,
}

/// Artwork bytes decoded for display
struct LoadedArtwork {
    url: String,
    handle: image::Handle,
}

pub struct AlbumArtFinder<T: HttpTransport = ReqwestTransport> {
    screen: SearchScreen,
    dispatcher: Option<Arc<SearchDispatcher<T>>>,
    config_warning: Option<String>,
    artwork: Option<LoadedArtwork>,
    artwork_error: Option<String>,
    spinner_tick: u32,
}

impl<T: HttpTransport + 'static> AlbumArtFinder<T> {
    pub fn new(startup: Startup<T>) -> (Self, Task<Message>) {
        let (dispatcher, config_warning) = match startup.dispatcher {
            Ok(dispatcher) => (Some(Arc::new(dispatcher)), None),
            Err(warning) => (None, Some(warning)),
        };

        (
            Self {
                screen: SearchScreen::new(startup.policy),
                dispatcher,
                config_warning,
                artwork: None,
                artwork_error: None,
                spinner_tick: 0,
            },
            Task::none(),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        // Only animate while a search is in flight
        if self.screen.is_loading() {
            time::every(Duration::from_millis(120)).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        views::search_screen(self)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if !matches!(message, Message::SpinnerTick) {
            tracing::trace!(target: "ui::update", message = ?message, "Update received");
        }

        match message {
            Message::QueryChanged(_) | Message::SearchPressed | Message::SearchSettled(..) => {
                update::handle_search(self, message)
            }
            Message::ArtworkLoaded(..) => update::handle_artwork(self, message),
            Message::SpinnerTick => {
                self.spinner_tick = self.spinner_tick.wrapping_add(1);
                Task::none()
            }
        }
    }
}
