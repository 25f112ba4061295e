pub mod state;

use self::state::create_state;
use crate::shared::api_utils::api_url;
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::toast::Toast;
use contracts::domain::recipe::aggregate::Recipe;
use contracts::shared::text::{ingredient_preview, unique_tags};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;
use std::rc::Rc;

#[component]
#[allow(non_snake_case)]
pub fn RecipeListPage() -> impl IntoView {
    let state = create_state();
    let (recipes, set_recipes) = signal::<Vec<Recipe>>(Vec::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal::<Option<String>>(None);
    let (toast, set_toast) = signal::<Option<String>>(None);
    let (pending_delete, set_pending_delete) = signal::<Option<Recipe>>(None);

    let show_toast = move |message: String| {
        set_toast.set(Some(message));
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(4_000).await;
            set_toast.set(None);
        });
    };

    let fetch = move || {
        set_loading.set(true);
        let s = state.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_recipes(&s.search, &s.tag, &s.sort).await {
                Ok(items) => {
                    set_recipes.set(items);
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("failed to load recipes: {e}");
                    set_recipes.set(Vec::new());
                    set_error.set(Some(
                        "Unable to load recipes right now. Please try again.".to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    };

    // Loading -> {Loaded, LoadFailed}; re-enter Loading on any filter change
    Effect::new(move |_| {
        state.track();
        fetch();
    });

    // A ?status= query param left by the form pages becomes a toast, then
    // gets stripped from the URL.
    let query = use_query_map();
    let navigate = use_navigate();
    Effect::new(move |_| {
        if let Some(status) = query.get_untracked().get("status") {
            let message = match status.as_str() {
                "created" => "Recipe saved successfully!",
                "updated" => "Recipe updated successfully!",
                _ => "Action completed successfully!",
            };
            show_toast(message.to_string());
            navigate(
                "/",
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        }
    });

    // Tag dropdown is scoped to the currently loaded result set
    let all_tags = Memo::new(move |_| unique_tags(&recipes.get()));

    let confirm_delete = move |_: ()| {
        let Some(recipe) = pending_delete.get_untracked() else {
            return;
        };
        let id = recipe.id.as_string();
        let title = recipe.title.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match delete_recipe(&id).await {
                Ok(()) => {
                    show_toast(format!("\"{}\" deleted successfully.", title));
                    set_pending_delete.set(None);
                    fetch();
                }
                Err(e) => {
                    log::error!("failed to delete recipe: {e}");
                    show_toast("Failed to delete recipe. Please try again.".to_string());
                }
            }
        });
    };

    view! {
        <div class="page">
            <header class="app-header">
                <div class="brand">
                    <span class="brand__icon">"🍳"</span>
                    <div>
                        <a href="/" class="brand__title">"RecipeShare"</a>
                        <p class="brand__subtitle">"Discover and share recipes you love"</p>
                    </div>
                </div>
                <a href="/recipes/new" class="button button--primary">"+ Add Recipe"</a>
            </header>

            <div class="controls">
                <input
                    type="text"
                    class="controls__search"
                    placeholder="Search recipes by title"
                    prop:value=move || state.get().search
                    on:input=move |ev| {
                        state.update(|s| s.search = event_target_value(&ev));
                    }
                />
                <select
                    class="controls__select"
                    prop:value=move || state.get().tag
                    on:change=move |ev| {
                        state.update(|s| s.tag = event_target_value(&ev));
                    }
                >
                    <option value="">"Filter by tag"</option>
                    {move || all_tags.get().into_iter().map(|tag| {
                        let selected = state.get().tag == tag;
                        view! {
                            <option value=tag.clone() selected=selected>{tag.clone()}</option>
                        }
                    }).collect_view()}
                </select>
                <select
                    class="controls__select"
                    prop:value=move || state.get().sort
                    on:change=move |ev| {
                        state.update(|s| s.sort = event_target_value(&ev));
                    }
                >
                    <option value="">"Sort by title"</option>
                    <option value="asc">"A-Z"</option>
                    <option value="desc">"Z-A"</option>
                </select>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <main class="content">
                {move || if loading.get() {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            <p>"Loading recipes..."</p>
                        </div>
                    }.into_any()
                } else if recipes.get().is_empty() {
                    view! {
                        <div class="empty-state">
                            <p class="empty-state__headline">
                                "No recipes yet. Add your first one!"
                            </p>
                            <a href="/recipes/new" class="button button--primary">
                                "Create a recipe"
                            </a>
                        </div>
                    }.into_any()
                } else {
                    view! {
                        <div class="recipe-grid">
                            {recipes.get().into_iter().map(|recipe| {
                                let edit_href = format!("/recipes/{}/edit", recipe.id.as_string());
                                let preview = ingredient_preview(&recipe.ingredients, 3);
                                let tags: Vec<String> = recipe
                                    .tags
                                    .as_deref()
                                    .map(|t| {
                                        t.split(',')
                                            .map(|s| s.trim().to_string())
                                            .filter(|s| !s.is_empty())
                                            .collect()
                                    })
                                    .unwrap_or_default();
                                let for_delete = recipe.clone();
                                view! {
                                    <article class="recipe-card">
                                        <div class="recipe-card__media">
                                            {match recipe.image_url.clone() {
                                                Some(url) => view! {
                                                    <img src=url alt=recipe.title.clone() />
                                                }.into_any(),
                                                None => view! {
                                                    <div class="recipe-card__placeholder">"🍽️"</div>
                                                }.into_any(),
                                            }}
                                        </div>
                                        <div class="recipe-card__body">
                                            <a href=edit_href.clone() class="recipe-card__title">
                                                {recipe.title.clone()}
                                            </a>
                                            <div class="recipe-card__tags">
                                                {tags.into_iter().map(|tag| view! {
                                                    <span class="tag-chip">{tag}</span>
                                                }).collect_view()}
                                            </div>
                                            <div class="recipe-card__ingredients">
                                                <p class="recipe-card__ingredients-label">
                                                    "Key ingredients"
                                                </p>
                                                {if preview.is_empty() {
                                                    view! { <p>"No ingredients listed."</p> }.into_any()
                                                } else {
                                                    view! {
                                                        <ul>
                                                            {preview.into_iter().map(|item| view! {
                                                                <li>{item}</li>
                                                            }).collect_view()}
                                                        </ul>
                                                    }.into_any()
                                                }}
                                            </div>
                                            <div class="recipe-card__footer">
                                                <span>
                                                    {format!("Created {}", recipe.created_at.format("%Y-%m-%d"))}
                                                </span>
                                                <div class="recipe-card__actions">
                                                    <a href=edit_href class="button button--secondary">
                                                        "Edit"
                                                    </a>
                                                    <button
                                                        class="button button--danger"
                                                        on:click=move |_| {
                                                            set_pending_delete.set(Some(for_delete.clone()))
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </div>
                                        </div>
                                    </article>
                                }
                            }).collect_view()}
                        </div>
                    }.into_any()
                }}
            </main>

            <Toast message=toast />

            {move || pending_delete.get().map(|recipe| {
                let on_confirm: Rc<dyn Fn(())> = Rc::new(move |_| confirm_delete(()));
                let on_cancel: Rc<dyn Fn(())> = Rc::new(move |_| set_pending_delete.set(None));
                view! {
                    <ConfirmDialog
                        title="Delete Recipe".to_string()
                        message=format!(
                            "Are you sure you want to delete \"{}\"? This action cannot be undone.",
                            recipe.title
                        )
                        confirm_label="Delete".to_string()
                        on_confirm=on_confirm
                        on_cancel=on_cancel
                    />
                }
            })}
        </div>
    }
}

async fn fetch_recipes(search: &str, tag: &str, sort: &str) -> Result<Vec<Recipe>, String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let mut params: Vec<String> = Vec::new();
    if !search.is_empty() {
        params.push(format!("search={}", urlencoding::encode(search)));
    }
    if !tag.is_empty() {
        params.push(format!("tag={}", urlencoding::encode(tag)));
    }
    if !sort.is_empty() {
        params.push(format!("sort={}", urlencoding::encode(sort)));
    }
    let query = if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    };

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let url = api_url(&format!("/api/recipes{}", query));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;
    let data: Vec<Recipe> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    Ok(data)
}

async fn delete_recipe(id: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_mode(RequestMode::Cors);

    let url = api_url(&format!("/api/recipes/{}", id));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    Ok(())
}
