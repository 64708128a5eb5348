use crate::dashboard::intent::{DashboardIntent, InputEdit};
use crate::dashboard::mvi::Reducer;
use crate::dashboard::state::{AppState, SiteStatus};

/// Each intent touches only its own field; everything else is carried over.
pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type Model = AppState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::Model, intent: Self::Intent) -> Self::Model {
        match intent {
            DashboardIntent::Seed => AppState::initial(),
            DashboardIntent::SitesFetched { sites } => AppState { sites, ..state },
            DashboardIntent::AddSiteInputChanged { text } => AppState {
                add_site_input: text,
                ..state
            },
            DashboardIntent::AddSiteInputEdited { edit } => {
                let mut text = state.add_site_input;
                match edit {
                    InputEdit::Insert(chunk) => text.push_str(&chunk),
                    InputEdit::Backspace => {
                        text.pop();
                    }
                }
                AppState {
                    add_site_input: text,
                    ..state
                }
            }
            DashboardIntent::AddSiteCompleted { message } => AppState {
                add_site_status: message,
                ..state
            },
            DashboardIntent::RemoveSiteCompleted { message } => AppState {
                remove_site_status: message,
                ..state
            },
            DashboardIntent::MoveSelection { delta } => {
                let selected = move_selection(&state.sites, state.selected.as_deref(), delta);
                AppState { selected, ..state }
            }
        }
    }
}

/// Next selected key, clamped to the table. A missing or stale selection
/// starts from the top when moving down and from the bottom when moving up.
fn move_selection(sites: &[SiteStatus], current: Option<&str>, delta: isize) -> Option<String> {
    let last = sites.len().checked_sub(1)?;
    let position = current.and_then(|key| sites.iter().position(|site| site.key == key));
    let next = match position {
        Some(idx) if delta < 0 => idx.saturating_sub(delta.unsigned_abs()),
        Some(idx) => idx.saturating_add(delta.unsigned_abs()).min(last),
        None if delta < 0 => last,
        None => 0,
    };
    Some(sites[next].key.clone())
}
