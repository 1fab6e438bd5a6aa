use crate::domain::a004_task::api;
use crate::layout::global_context::use_app_context;
use crate::shared::i18n::texts;
use contracts::domain::a004_task::aggregate::{
    normalize_keyword_names, Keyword, SuggestKeywordsRequest, Task, TaskDto,
    SUGGESTION_MIN_TITLE_LEN,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SUGGESTION_DELAY_MS: u32 = 500;

/// Add `name` unless already picked (case-insensitive)
fn pick_keyword(picked: &mut Vec<String>, name: &str) {
    let mut all = picked.clone();
    all.push(name.to_string());
    *picked = normalize_keyword_names(&all);
}

#[component]
pub fn AddTaskForm(on_created: Callback<Task>) -> impl IntoView {
    let ctx = use_app_context();
    let t = move || &texts(ctx.language.get()).tasks;

    let title = RwSignal::new(String::new());
    let picked = RwSignal::new(Vec::<String>::new());
    let known = RwSignal::new(Vec::<Keyword>::new());
    let suggestions = RwSignal::new(Vec::<String>::new());
    let saving = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    // Bumped on every keystroke; a pending lookup only runs if still current
    let generation = StoredValue::new(0u64);

    spawn_local(async move {
        match api::fetch_keywords().await {
            Ok(list) => known.set(list),
            Err(e) => log::error!("Failed to load keywords: {}", e),
        }
    });

    let schedule_suggestions = move |text: String| {
        generation.update_value(|g| *g += 1);
        let current = generation.get_value();
        if text.trim().chars().count() < SUGGESTION_MIN_TITLE_LEN {
            suggestions.set(Vec::new());
            return;
        }
        spawn_local(async move {
            TimeoutFuture::new(SUGGESTION_DELAY_MS).await;
            if generation.get_value() != current {
                return;
            }
            let request = SuggestKeywordsRequest {
                task_title: text,
                exclude: picked.get_untracked(),
            };
            match api::suggest_keywords(&request).await {
                Ok(list) if generation.get_value() == current => suggestions.set(list),
                Ok(_) => {}
                Err(e) => log::warn!("Keyword suggestion failed: {}", e),
            }
        });
    };

    Effect::new(move |_| {
        let text = title.get();
        schedule_suggestions(text);
    });

    let add_keyword = move |name: String| {
        picked.update(|p| pick_keyword(p, &name));
        suggestions.update(|s| s.retain(|n| !n.eq_ignore_ascii_case(&name)));
    };

    let remove_keyword = move |name: String| {
        picked.update(|p| p.retain(|n| n != &name));
    };

    let submit = move || {
        let dto = TaskDto {
            title: title.get_untracked().trim().to_string(),
            keywords: picked.get_untracked(),
        };
        if let Err(e) = dto.validate() {
            error.set(Some(e));
            return;
        }
        saving.set(true);
        spawn_local(async move {
            match api::create_task(&dto).await {
                Ok(task) => {
                    on_created.run(task);
                    title.set(String::new());
                    picked.set(Vec::new());
                    suggestions.set(Vec::new());
                    error.set(None);
                    if let Ok(list) = api::fetch_keywords().await {
                        known.set(list);
                    }
                }
                Err(e) => error.set(Some(e)),
            }
            saving.set(false);
        });
    };

    view! {
        <Card class="task-form">
            <h3>{move || t().new_task}</h3>
            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form__group">
                <Input
                    value=title
                    placeholder=Signal::derive(move || t().title_placeholder.to_string())
                    disabled=Signal::derive(move || saving.get())
                />
            </div>

            <div class="form__group">
                <Label>{move || t().keywords_label}</Label>
                <div class="task-form__chips">
                    <For
                        each=move || picked.get()
                        key=|name| name.clone()
                        children=move |name: String| {
                            let label = name.clone();
                            view! {
                                <button class="chip chip--selected" on:click=move |_| remove_keyword(name.clone())>
                                    {label} " ×"
                                </button>
                            }
                        }
                    />
                </div>
                <div class="task-form__chips">
                    <For
                        each=move || {
                            let chosen = picked.get();
                            known
                                .get()
                                .into_iter()
                                .filter(|k| !chosen.iter().any(|c| c.eq_ignore_ascii_case(&k.name)))
                                .collect::<Vec<_>>()
                        }
                        key=|keyword| keyword.id
                        children=move |keyword: Keyword| {
                            let name = keyword.name.clone();
                            view! {
                                <button class="chip" on:click=move |_| add_keyword(name.clone())>
                                    {keyword.name}
                                </button>
                            }
                        }
                    />
                </div>
            </div>

            <Show when=move || !suggestions.with(|s| s.is_empty())>
                <div class="form__group">
                    <Label>{move || t().suggestions_label}</Label>
                    <div class="task-form__chips">
                        <For
                            each=move || suggestions.get()
                            key=|name| name.clone()
                            children=move |name: String| {
                                let label = name.clone();
                                view! {
                                    <button class="chip chip--suggested" on:click=move |_| add_keyword(name.clone())>
                                        "+ " {label}
                                    </button>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| submit()
                disabled=Signal::derive(move || saving.get())
            >
                {move || t().add_button}
            </Button>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pick_keyword_dedupes_case_insensitively() {
        let mut picked = vec!["design".to_string()];
        pick_keyword(&mut picked, "Design");
        pick_keyword(&mut picked, " Frontend ");
        assert_eq!(picked, vec!["design", "frontend"]);
    }
}
