use leptos::prelude::*;
use std::rc::Rc;

/// Blocking confirmation prompt rendered as a modal overlay. Cancel closes
/// the dialog with no side effect.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    confirm_label: String,
    on_confirm: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal">
                <h2 class="modal__title">{title}</h2>
                <p class="modal__message">{message}</p>
                <div class="modal__actions">
                    <button
                        class="button button--secondary"
                        on:click=move |_| (on_cancel)(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="button button--danger"
                        on:click=move |_| (on_confirm)(())
                    >
                        {confirm_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
