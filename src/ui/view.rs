//! Pure projection of [`AppState`] into a render tree.
//!
//! The tree is plain data so it can be compared in tests and drawn by any
//! backend; [`crate::ui::render`] draws it with ratatui.

use crate::dashboard::{AppState, SiteStatus};

pub const TABLE_HEADERS: [&str; 6] = [
    "Key",
    "Uptime",
    "Status",
    "",
    "Last check",
    "History",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderTree {
    pub input: InputField,
    pub add_status: Option<String>,
    pub remove_status: Option<String>,
    pub table: SiteTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteTable {
    pub headers: [&'static str; 6],
    pub rows: Vec<SiteRow>,
}

impl SiteTable {
    /// Position of the highlighted row, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.selected)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    Up,
    Down,
    Unchecked,
}

impl Health {
    /// Same rule the inventory server uses for uptime: anything below 400
    /// counts as up, `0` means no check has run yet.
    pub fn from_status(status: u16) -> Self {
        match status {
            0 => Health::Unchecked,
            s if s < 400 => Health::Up,
            _ => Health::Down,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteRow {
    /// Row identity, also the target of a removal.
    pub key: String,
    pub uptime: String,
    pub status: String,
    pub status_text: String,
    pub last_check: String,
    /// Path of the site's history page on the inventory server.
    pub history: String,
    pub health: Health,
    pub selected: bool,
}

pub fn project(state: &AppState) -> RenderTree {
    let selected = state.selected.as_deref();
    RenderTree {
        input: InputField {
            label: "Add site",
            value: state.add_site_input.clone(),
        },
        add_status: non_empty(&state.add_site_status),
        remove_status: non_empty(&state.remove_site_status),
        table: SiteTable {
            headers: TABLE_HEADERS,
            rows: state
                .sites
                .iter()
                .map(|site| project_row(site, selected == Some(site.key.as_str())))
                .collect(),
        },
    }
}

fn project_row(site: &SiteStatus, selected: bool) -> SiteRow {
    SiteRow {
        key: site.key.clone(),
        uptime: site.uptime.to_string(),
        status: if site.status == 0 {
            "-".to_string()
        } else {
            site.status.to_string()
        },
        status_text: site.status_text.clone(),
        last_check: site
            .last_check
            .map(|at| at.format("%Y-%m-%d %H:%M:%S UTC").to_string())
            .unwrap_or_default(),
        history: format!("/site?key={}", site.key),
        health: Health::from_status(site.status),
        selected,
    }
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}
