use crate::dashboard::mvi::Intent;
use crate::dashboard::state::SiteStatus;

/// Edit applied to the "new site key" field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEdit {
    /// Append text at the end (typed character or paste).
    Insert(String),
    /// Drop the last character.
    Backspace,
}

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    /// Reset to the initial state. Emitted once, before anything else.
    Seed,
    /// A `sites` poll returned this inventory.
    SitesFetched { sites: Vec<SiteStatus> },
    /// The input field now holds exactly `text`.
    AddSiteInputChanged { text: String },
    /// The input field was edited relative to its current value.
    AddSiteInputEdited { edit: InputEdit },
    /// An `addSite` mutation answered with `message`.
    AddSiteCompleted { message: String },
    /// A `removeSite` mutation answered with `message`.
    RemoveSiteCompleted { message: String },
    /// Move the row selection by `delta` rows.
    MoveSelection { delta: isize },
}

impl Intent for DashboardIntent {}

impl DashboardIntent {
    /// Short name used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            DashboardIntent::Seed => "seed",
            DashboardIntent::SitesFetched { .. } => "sites_fetched",
            DashboardIntent::AddSiteInputChanged { .. } => "add_site_input_changed",
            DashboardIntent::AddSiteInputEdited { .. } => "add_site_input_edited",
            DashboardIntent::AddSiteCompleted { .. } => "add_site_completed",
            DashboardIntent::RemoveSiteCompleted { .. } => "remove_site_completed",
            DashboardIntent::MoveSelection { .. } => "move_selection",
        }
    }
}
