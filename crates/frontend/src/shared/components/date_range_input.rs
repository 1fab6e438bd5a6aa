use leptos::prelude::*;
use thaw::*;

/// Two native date pickers bound to yyyy-mm-dd signals
#[component]
pub fn DateRangeInput(
    #[prop(into)] label: Signal<String>,
    date_from: RwSignal<String>,
    date_to: RwSignal<String>,
) -> impl IntoView {
    view! {
        <Flex vertical=true gap=FlexGap::Small>
            <Label>{move || label.get()}</Label>
            <Flex class="date-range-input" align=FlexAlign::Center gap=FlexGap::Small>
                <input
                    type="date"
                    class="date-range-input__field"
                    prop:value=move || date_from.get()
                    on:input=move |ev| date_from.set(event_target_value(&ev))
                />
                <div>"—"</div>
                <input
                    type="date"
                    class="date-range-input__field"
                    prop:value=move || date_to.get()
                    on:input=move |ev| date_to.set(event_target_value(&ev))
                />
            </Flex>
        </Flex>
    }
}
