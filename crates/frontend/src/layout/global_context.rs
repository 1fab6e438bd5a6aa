use contracts::shared::language::Language;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const LANGUAGE_STORAGE_KEY: &str = "app-language";

/// Top-level page shown in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Landing,
    Performance,
    Tasks,
    Register,
    Verify,
    Login,
}

impl Page {
    pub fn key(&self) -> &'static str {
        match self {
            Page::Landing => "landing",
            Page::Performance => "performance",
            Page::Tasks => "tasks",
            Page::Register => "register",
            Page::Verify => "verify",
            Page::Login => "login",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "landing" => Some(Page::Landing),
            "performance" => Some(Page::Performance),
            "tasks" => Some(Page::Tasks),
            "register" => Some(Page::Register),
            "verify" => Some(Page::Verify),
            "login" => Some(Page::Login),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub page: RwSignal<Page>,
    pub language: RwSignal<Language>,
    /// Address awaiting verification, carried from register to verify
    pub verify_email: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            page: RwSignal::new(Page::default()),
            language: RwSignal::new(load_language_from_storage()),
            verify_email: RwSignal::new(None),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate: {}", page.key());
        self.page.set(page);
    }

    pub fn open_verify(&self, email: String) {
        self.verify_email.set(Some(email));
        self.navigate(Page::Verify);
    }

    pub fn toggle_language(&self) {
        let next = self.language.get_untracked().toggled();
        save_language_to_storage(next);
        self.language.set(next);
    }

    /// Sync the current page (and pending e-mail) with `?page=...&email=...`
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("page").and_then(|key| Page::from_key(key)) {
            self.page.set(page);
        }
        if let Some(email) = params.get("email").cloned() {
            self.verify_email.set(Some(email));
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.page.get();
            let mut query = HashMap::from([("page".to_string(), page.key().to_string())]);
            if page == Page::Verify {
                if let Some(email) = this.verify_email.get() {
                    query.insert("email".to_string(), email);
                }
            }
            let new_url = format!("?{}", serde_qs::to_string(&query).unwrap_or_default());

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

fn load_language_from_storage() -> Language {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_STORAGE_KEY).ok().flatten())
        .and_then(|code| Language::from_code(&code))
        .unwrap_or_default()
}

fn save_language_to_storage(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(LANGUAGE_STORAGE_KEY, language.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_keys_roundtrip() {
        for page in [
            Page::Landing,
            Page::Performance,
            Page::Tasks,
            Page::Register,
            Page::Verify,
            Page::Login,
        ] {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key("admin"), None);
    }
}
