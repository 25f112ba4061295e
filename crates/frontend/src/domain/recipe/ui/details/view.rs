use super::view_model::RecipeFormViewModel;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use std::rc::Rc;

#[component]
pub fn RecipeForm(
    id: Option<String>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let vm = RecipeFormViewModel::new();
    vm.load_if_needed(id);

    let vm_clone = vm.clone();

    view! {
        <div class="details-container recipe-form">
            <div class="details-header">
                <h1>
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Edit Recipe" } else { "Add a New Recipe" }
                    }
                </h1>
            </div>

            {
                let vm = vm_clone.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for="title">"Title"</label>
                    <input
                        type="text"
                        id="title"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().title
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.title = event_target_value(&ev));
                            }
                        }
                        placeholder="e.g. Chocolate Cake"
                    />
                </div>

                <div class="form-group">
                    <label for="ingredients">"Ingredients"</label>
                    <textarea
                        id="ingredients"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().ingredients
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                vm.form.update(|f| f.ingredients = event_target_value(&ev));
                            }
                        }
                        placeholder="One ingredient per line"
                        rows="8"
                    />
                </div>

                <div class="form-group">
                    <label for="tags">"Tags"</label>
                    <input
                        type="text"
                        id="tags"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().tags.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.tags = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="Comma-separated, e.g. Dessert, Quick"
                    />
                </div>

                <div class="form-group">
                    <label for="image_url">"Image URL"</label>
                    <input
                        type="text"
                        id="image_url"
                        prop:value={
                            let vm = vm_clone.clone();
                            move || vm.form.get().image_url.clone().unwrap_or_default()
                        }
                        on:input={
                            let vm = vm_clone.clone();
                            move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| {
                                    f.image_url = if value.is_empty() { None } else { Some(value) };
                                });
                            }
                        }
                        placeholder="https://example.com/photo.jpg (optional)"
                    />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click={
                        let vm = vm_clone.clone();
                        let on_saved = on_saved.clone();
                        move |_| vm.save_command(on_saved.clone())
                    }
                    disabled={
                        let vm = vm_clone.clone();
                        move || !vm.is_form_valid()() || vm.saving.get()
                    }
                >
                    {
                        let vm = vm_clone.clone();
                        move || if vm.is_edit_mode()() { "Save Changes" } else { "Create Recipe" }
                    }
                </button>
                <button
                    class="button button--secondary"
                    on:click=move |_| (on_cancel)(())
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn RecipeNewPage() -> impl IntoView {
    let navigate = use_navigate();
    let navigate_cancel = navigate.clone();
    let on_saved: Rc<dyn Fn(())> =
        Rc::new(move |_| navigate("/?status=created", Default::default()));
    let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| navigate_cancel("/", Default::default()));

    view! {
        <div class="page">
            <RecipeForm id=None on_saved=on_saved on_cancel=on_cancel />
        </div>
    }
}

#[component]
pub fn RecipeEditPage() -> impl IntoView {
    let params = use_params_map();
    let id = params.get_untracked().get("id");

    let navigate = use_navigate();
    let navigate_cancel = navigate.clone();
    let on_saved: Rc<dyn Fn(())> =
        Rc::new(move |_| navigate("/?status=updated", Default::default()));
    let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| navigate_cancel("/", Default::default()));

    view! {
        <div class="page">
            {match id {
                Some(id) => view! {
                    <RecipeForm id=Some(id) on_saved=on_saved on_cancel=on_cancel />
                }.into_any(),
                None => view! { <div class="error">"Missing recipe id."</div> }.into_any(),
            }}
        </div>
    }
}
