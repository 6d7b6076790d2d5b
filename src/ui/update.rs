//! Update handlers for search screen messages.

use std::future::Future;

use iced::Task;
use iced::widget::image;

use super::messages::Message;
use super::state::Settlement;
use super::{AlbumArtFinder, LoadedArtwork};
use crate::artwork::traits::HttpTransport;

/// Handle input and search lifecycle messages
pub fn handle_search<T: HttpTransport + 'static>(
    app: &mut AlbumArtFinder<T>,
    message: Message,
) -> Task<Message> {
    match message {
        Message::QueryChanged(query) => {
            app.screen.set_query(query);
        }
        Message::SearchPressed => {
            if let Some(search) = start_search(app) {
                return Task::perform(search, std::convert::identity);
            }
        }
        Message::SearchSettled(ticket, result) => {
            if app.screen.settle(ticket, result) == Settlement::Stale {
                return Task::none();
            }
            return sync_artwork(app);
        }
        _ => {}
    }
    Task::none()
}

/// Move the screen to `Loading` and return the search that settles it.
///
/// `search()` resolves every outcome, so the returned future always yields
/// `SearchSettled`.
fn start_search<T: HttpTransport + 'static>(
    app: &mut AlbumArtFinder<T>,
) -> Option<impl Future<Output = Message> + Send + use<T>> {
    let Some(dispatcher) = app.dispatcher.clone() else {
        tracing::debug!("Search pressed without a configured API key");
        return None;
    };
    let ticket = app.screen.begin_search()?;

    app.spinner_tick = 0;
    let query = app.screen.query().to_string();
    tracing::debug!(ticket = ticket.sequence(), %query, "Dispatching search");

    Some(async move {
        let result = dispatcher.search(&query).await;
        Message::SearchSettled(ticket, result)
    })
}

/// Handle downloaded artwork bytes
pub fn handle_artwork<T: HttpTransport>(
    app: &mut AlbumArtFinder<T>,
    message: Message,
) -> Task<Message> {
    let Message::ArtworkLoaded(url, result) = message else {
        return Task::none();
    };

    // A newer result may have replaced this URL while it was downloading
    if app.screen.image_url() != Some(url.as_str()) {
        return Task::none();
    }

    match result {
        Ok(bytes) => {
            app.artwork = Some(LoadedArtwork {
                url,
                handle: image::Handle::from_bytes(bytes),
            });
            app.artwork_error = None;
        }
        Err(e) => {
            tracing::warn!(%url, error = %e, "Failed to load artwork");
            app.artwork = None;
            app.artwork_error = Some(e);
        }
    }
    Task::none()
}

/// Make the displayed artwork match the screen's current image URL,
/// downloading it if needed.
fn sync_artwork<T: HttpTransport + 'static>(app: &mut AlbumArtFinder<T>) -> Task<Message> {
    app.artwork_error = None;

    let Some(url) = app.screen.image_url().map(str::to_string) else {
        app.artwork = None;
        return Task::none();
    };

    if app.artwork.as_ref().is_some_and(|a| a.url == url) {
        return Task::none();
    }

    let Some(dispatcher) = app.dispatcher.clone() else {
        return Task::none();
    };

    let url_for_message = url.clone();
    Task::perform(
        async move {
            dispatcher
                .download_artwork(&url)
                .await
                .map(|artwork| artwork.data)
                .map_err(|e| e.to_string())
        },
        move |result| Message::ArtworkLoaded(url_for_message.clone(), result),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artwork::traits::mocks::MockTransport;
    use crate::artwork::{ImageResult, SearchConfig, SearchDispatcher};
    use crate::ui::state::{ResponsePolicy, SearchPhase, SearchScreen};
    use crate::ui::Startup;
    use std::sync::Arc;
    use std::time::Duration;

    fn unconfigured() -> AlbumArtFinder<MockTransport> {
        AlbumArtFinder::new(Startup {
            dispatcher: Err("Last.fm API key not configured".to_string()),
            policy: ResponsePolicy::default(),
        })
        .0
    }

    fn body_for(url: &str) -> String {
        format!(
            r##"{{"results": {{"albummatches": {{"album": [{{"image": [
                {{"#text": "a", "size": "small"}},
                {{"#text": "b", "size": "medium"}},
                {{"#text": "c", "size": "large"}},
                {{"#text": "{}", "size": "extralarge"}}
            ]}}]}}}}}}"##,
            url
        )
    }

    fn delayed_dispatcher(url: &str, delay: Duration) -> Arc<SearchDispatcher<MockTransport>> {
        let mock = MockTransport::json(&body_for(url)).delayed(delay);
        let config = SearchConfig {
            api_key: "k".to_string(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        };
        Arc::new(SearchDispatcher::with_transport(config, Arc::new(mock)))
    }

    fn configured(mock: MockTransport) -> AlbumArtFinder<MockTransport> {
        let config = SearchConfig {
            api_key: "test-key".to_string(),
            timeout: Duration::from_secs(5),
            ..Default::default()
        };
        AlbumArtFinder::new(Startup {
            dispatcher: Ok(SearchDispatcher::with_transport(config, Arc::new(mock))),
            policy: ResponsePolicy::default(),
        })
        .0
    }

    #[tokio::test]
    async fn test_failed_search_leaves_loading() {
        let mut app = configured(MockTransport::failing("connection refused"));
        let _ = handle_search(&mut app, Message::QueryChanged("Blue Train".to_string()));

        let search = start_search(&mut app).expect("search should start");
        assert!(app.screen.is_loading());

        let settled = search.await;
        assert!(matches!(settled, Message::SearchSettled(..)));
        let _ = handle_search(&mut app, settled);

        assert!(!app.screen.is_loading());
        assert_eq!(app.screen.in_flight(), 0);
        match app.screen.phase() {
            SearchPhase::Failed { message } => assert!(message.contains("connection refused")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_found_search_shows_url() {
        let mut app = configured(MockTransport::json(&body_for("https://img/found.png")));
        let _ = handle_search(&mut app, Message::QueryChanged("Blue Train".to_string()));

        let settled = start_search(&mut app).unwrap().await;
        let _ = handle_search(&mut app, settled);

        assert_eq!(app.screen.image_url(), Some("https://img/found.png"));
        assert!(!app.screen.is_loading());
    }

    #[test]
    fn test_blank_query_does_not_start_search() {
        let mut app = configured(MockTransport::json("{}"));
        assert!(start_search(&mut app).is_none());
        assert_eq!(app.screen.phase(), &SearchPhase::Idle);
    }

    #[test]
    fn test_query_changes_are_stored() {
        let mut app = unconfigured();
        let _ = handle_search(&mut app, Message::QueryChanged("Blue Train".to_string()));
        assert_eq!(app.screen.query(), "Blue Train");
        assert_eq!(app.screen.phase(), &SearchPhase::Idle);
    }

    #[test]
    fn test_search_without_key_stays_idle() {
        let mut app = unconfigured();
        let _ = handle_search(&mut app, Message::QueryChanged("Blue Train".to_string()));
        let _ = handle_search(&mut app, Message::SearchPressed);
        assert!(!app.screen.is_loading());
        assert!(app.config_warning.is_some());
    }

    #[test]
    fn test_settled_not_found_clears_artwork() {
        let mut app = unconfigured();
        app.screen.set_query("x");
        let ticket = app.screen.begin_search().unwrap();

        let _ = handle_search(&mut app, Message::SearchSettled(ticket, ImageResult::NotFound));
        assert!(!app.screen.is_loading());
        assert!(app.artwork.is_none());
    }

    #[test]
    fn test_artwork_for_replaced_url_is_ignored() {
        let mut app = unconfigured();
        app.screen.set_query("x");
        let ticket = app.screen.begin_search().unwrap();
        app.screen.settle(
            ticket,
            ImageResult::Found {
                url: "https://img/current.png".to_string(),
            },
        );

        let _ = handle_artwork(
            &mut app,
            Message::ArtworkLoaded("https://img/old.png".to_string(), Ok(vec![1, 2, 3])),
        );
        assert!(app.artwork.is_none());

        let _ = handle_artwork(
            &mut app,
            Message::ArtworkLoaded("https://img/current.png".to_string(), Ok(vec![1, 2, 3])),
        );
        assert_eq!(
            app.artwork.as_ref().map(|a| a.url.as_str()),
            Some("https://img/current.png")
        );
    }

    #[test]
    fn test_artwork_download_failure_is_recorded() {
        let mut app = unconfigured();
        app.screen.set_query("x");
        let ticket = app.screen.begin_search().unwrap();
        app.screen.settle(
            ticket,
            ImageResult::Found {
                url: "https://img/a.png".to_string(),
            },
        );

        let _ = handle_artwork(
            &mut app,
            Message::ArtworkLoaded("https://img/a.png".to_string(), Err("HTTP 500".to_string())),
        );
        assert!(app.artwork.is_none());
        assert_eq!(app.artwork_error.as_deref(), Some("HTTP 500"));
    }

    /// Runs two overlapping searches where the second resolves first and
    /// settles them on the screen in completion order.
    async fn race(policy: ResponsePolicy) -> SearchScreen {
        let slow = delayed_dispatcher("https://img/slow.png", Duration::from_millis(150));
        let fast = delayed_dispatcher("https://img/fast.png", Duration::from_millis(10));

        let mut screen = SearchScreen::new(policy);
        screen.set_query("slow");
        let first = screen.begin_search().unwrap();
        screen.set_query("fast");
        let second = screen.begin_search().unwrap();

        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        for (ticket, dispatcher, query) in [(first, slow, "slow"), (second, fast, "fast")] {
            let tx = tx.clone();
            tokio::spawn(async move {
                let result = dispatcher.search(query).await;
                let _ = tx.send((ticket, result));
            });
        }
        drop(tx);

        let mut order = Vec::new();
        while let Some((ticket, result)) = rx.recv().await {
            order.push(ticket);
            screen.settle(ticket, result);
        }
        assert_eq!(order, vec![second, first]);
        screen
    }

    #[tokio::test]
    async fn test_overlapping_searches_last_settled_wins() {
        let screen = race(ResponsePolicy::LastSettled).await;
        assert!(!screen.is_loading());
        assert_eq!(screen.image_url(), Some("https://img/slow.png"));
    }

    #[tokio::test]
    async fn test_overlapping_searches_latest_request_wins() {
        let screen = race(ResponsePolicy::LatestRequest).await;
        assert!(!screen.is_loading());
        assert_eq!(screen.image_url(), Some("https://img/fast.png"));
        assert_eq!(screen.in_flight(), 0);
    }
}
