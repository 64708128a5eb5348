use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dashboard::mvi::Model;

/// Uptime as reported by the inventory API.
///
/// The server renders it as duration text (`"1h2m0s"`), older builds sent
/// plain seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Uptime {
    Seconds(f64),
    Text(String),
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Uptime::Seconds(secs) => write!(f, "{}s", secs),
            Uptime::Text(text) => f.write_str(text),
        }
    }
}

/// One row of the site inventory, exactly as the API returned it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteStatus {
    /// Unique within a poll; row identity and removal target.
    pub key: String,
    pub uptime: Uptime,
    /// Last HTTP status observed for the site, `0` when never checked.
    pub status: u16,
    pub status_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_check: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_check: Option<DateTime<Utc>>,
}

/// The single shared dashboard state.
///
/// Owned by [`StateStore`](crate::dashboard::StateStore); every change is a
/// whole replacement produced by a transition.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    /// Sites in server order.
    pub sites: Vec<SiteStatus>,
    /// Pending text of the "new site key" field.
    pub add_site_input: String,
    /// Text returned by the last completed add-site mutation.
    pub add_site_status: String,
    /// Text returned by the last completed remove-site mutation.
    pub remove_site_status: String,
    /// Key of the row the user selected. May name a site that a later poll
    /// dropped; see [`AppState::selected_site`].
    pub selected: Option<String>,
}

impl Model for AppState {}

impl AppState {
    /// The fixed value every session starts from.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn site(&self, key: &str) -> Option<&SiteStatus> {
        self.sites.iter().find(|site| site.key == key)
    }

    /// The selected site, if its key is still present in `sites`.
    pub fn selected_site(&self) -> Option<&SiteStatus> {
        self.selected.as_deref().and_then(|key| self.site(key))
    }
}
