pub mod app;
pub mod cluster;
pub mod config;

use deckhand_common::dashboard::Dashboard;

use crate::api::ApiClient;
use crate::terminal::TerminalView;

/// Dashboard controller wired to the HTTP client and the terminal
pub type Console = Dashboard<ApiClient, TerminalView>;
