use crate::state::AppState;

/// Result of the add/remove toggle on the displayed country.
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle {
    Added(String),
    Removed(String),
    NothingDisplayed,
}

pub async fn add_to_favourites(state: &AppState, name: &str) {
    state.favourites.add(name).await;
}

pub async fn remove_from_favourites(state: &AppState, name: &str) {
    state.favourites.remove(name).await;
}

/// Add the displayed country to favourites, or remove it if already there.
pub async fn toggle_favourite(state: &AppState) -> Toggle {
    let Some(record) = state.current().await else {
        return Toggle::NothingDisplayed;
    };
    let name = record.common_name();

    if state.favourites.contains(name).await {
        remove_from_favourites(state, name).await;
        Toggle::Removed(name.to_string())
    } else {
        add_to_favourites(state, name).await;
        Toggle::Added(name.to_string())
    }
}
