use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::recipe::ui::details::{RecipeEditPage, RecipeNewPage};
use crate::domain::recipe::ui::list::RecipeListPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <p class="empty-state">"Page not found."</p> }>
                <Route path=path!("/") view=RecipeListPage />
                <Route path=path!("/recipes/new") view=RecipeNewPage />
                <Route path=path!("/recipes/:id/edit") view=RecipeEditPage />
            </Routes>
        </Router>
    }
}
