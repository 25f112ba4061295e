use super::model;
use contracts::domain::recipe::aggregate::RecipeDto;
use leptos::prelude::*;
use std::rc::Rc;

/// ViewModel for the recipe form (create and edit)
#[derive(Clone)]
pub struct RecipeFormViewModel {
    pub edit_id: RwSignal<Option<String>>,
    pub form: RwSignal<RecipeDto>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl RecipeFormViewModel {
    pub fn new() -> Self {
        Self {
            edit_id: RwSignal::new(None),
            form: RwSignal::new(RecipeDto::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> impl Fn() -> bool + '_ {
        move || self.edit_id.get().is_some()
    }

    pub fn is_form_valid(&self) -> impl Fn() -> bool + '_ {
        move || Self::validate_form(&self.form.get()).is_ok()
    }

    // Mirror of the server-side presence checks
    fn validate_form(dto: &RecipeDto) -> Result<(), &'static str> {
        if dto.title.trim().is_empty() {
            return Err("Title is required");
        }
        if dto.ingredients.trim().is_empty() {
            return Err("Ingredients are required");
        }
        Ok(())
    }

    /// Load form data from the server if an id is provided
    pub fn load_if_needed(&self, id: Option<String>) {
        let Some(existing_id) = id else {
            return;
        };
        self.edit_id.set(Some(existing_id.clone()));

        let form = self.form;
        let error = self.error;
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_by_id(existing_id).await {
                Ok(recipe) => {
                    form.set(RecipeDto {
                        title: recipe.title,
                        ingredients: recipe.ingredients,
                        tags: recipe.tags,
                        image_url: recipe.image_url,
                    });
                }
                Err(e) => error.set(Some(format!("Failed to load recipe: {}", e))),
            }
        });
    }

    /// Save the form: POST for a new recipe, PUT for an existing one
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        let current = self.form.get();

        if let Err(msg) = Self::validate_form(&current) {
            self.error.set(Some(msg.to_string()));
            return;
        }

        let edit_id = self.edit_id.get();
        let error = self.error;
        let saving = self.saving;
        saving.set(true);

        wasm_bindgen_futures::spawn_local(async move {
            let result = match edit_id {
                Some(id) => model::update_recipe(&id, &current).await,
                None => model::create_recipe(&current).await,
            };
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
