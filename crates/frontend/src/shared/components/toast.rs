use leptos::prelude::*;

/// Transient status notification. Visibility is owned by the caller; the
/// component only renders whatever message is currently set.
#[component]
pub fn Toast(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message
                .get()
                .map(|m| view! { <div class="toast">{m}</div> })
        }}
    }
}
