//! Message types for the search screen.

use super::state::SearchTicket;
use crate::artwork::ImageResult;

/// All possible messages that can be sent in the application
#[derive(Debug, Clone)]
pub enum Message {
    // Input
    QueryChanged(String),
    SearchPressed,

    // Search completion (always sent, whatever the outcome)
    SearchSettled(SearchTicket, ImageResult),

    // Artwork bytes for a found URL
    ArtworkLoaded(String, Result<Vec<u8>, String>),

    // Loading indicator animation
    SpinnerTick,
}
