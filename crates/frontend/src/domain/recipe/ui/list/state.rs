use leptos::prelude::*;

/// Filter/sort state of the list view. Any change triggers a refetch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RecipeListState {
    pub search: String,
    pub tag: String,
    pub sort: String,
}

pub fn create_state() -> RwSignal<RecipeListState> {
    RwSignal::new(RecipeListState::default())
}
