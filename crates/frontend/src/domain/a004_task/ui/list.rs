use super::add_form::AddTaskForm;
use crate::domain::a004_task::api;
use crate::layout::global_context::use_app_context;
use crate::shared::i18n::texts;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a004_task::aggregate::Task;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use thaw::*;

/// Replace the task with the same id
fn replace_task(tasks: &mut [Task], updated: Task) {
    if let Some(slot) = tasks.iter_mut().find(|t| t.id == updated.id) {
        *slot = updated;
    }
}

#[component]
#[allow(non_snake_case)]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let t = move || &texts(ctx.language.get()).tasks;

    let tasks = RwSignal::new(Vec::<Task>::new());
    let error = RwSignal::new(None::<String>);

    let fetch = move || {
        spawn_local(async move {
            match api::fetch_tasks().await {
                Ok(v) => {
                    tasks.set(v);
                    error.set(None);
                }
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let toggle = move |id: i32| {
        spawn_local(async move {
            match api::toggle_task(id).await {
                Ok(task) => tasks.update(|list| replace_task(list, task)),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let on_created = Callback::new(move |task: Task| {
        tasks.update(|list| list.push(task));
    });

    fetch();

    view! {
        <PageFrame page_id="a004_task--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <h2>{move || t().title}</h2>
            </div>

            {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <AddTaskForm on_created=on_created />

            <div class="page__content">
                <Show
                    when=move || !tasks.with(|list| list.is_empty())
                    fallback=move || view! { <p class="empty">{t().empty}</p> }
                >
                    <ul class="task-list">
                        <For
                            each=move || tasks.get()
                            key=|task| (task.id, task.is_done)
                            children=move |task: Task| {
                                let id = task.id;
                                let is_done = task.is_done;
                                let keywords = task
                                    .keywords
                                    .into_iter()
                                    .map(|k| view! {
                                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>
                                            {k.name}
                                        </Badge>
                                    })
                                    .collect_view();
                                view! {
                                    <li class="task-list__item" class:task-list__item--done=is_done>
                                        <button
                                            class="task-list__toggle"
                                            aria-pressed={if is_done { "true" } else { "false" }}
                                            on:click=move |_| toggle(id)
                                        >
                                            {if is_done { icon("check") } else { view! { <span class="task-list__box"></span> }.into_any() }}
                                        </button>
                                        <span class="task-list__title">{task.title}</span>
                                        <span class="task-list__status">
                                            {move || if is_done { t().done } else { t().pending }}
                                        </span>
                                        <span class="task-list__keywords">{keywords}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i32, is_done: bool) -> Task {
        Task {
            id,
            title: format!("task {}", id),
            is_done,
            keywords: vec![],
        }
    }

    #[test]
    fn test_replace_task_by_id() {
        let mut tasks = vec![task(1, false), task(2, false)];
        replace_task(&mut tasks, task(2, true));
        assert!(!tasks[0].is_done);
        assert!(tasks[1].is_done);

        replace_task(&mut tasks, task(9, true));
        assert_eq!(tasks.len(), 2);
    }
}
