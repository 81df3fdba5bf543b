use leptos::prelude::*;

/// Dropdown of search suggestions.
///
/// Options are picked on `mousedown` so the pick lands before the input
/// loses focus and the outside-click listener runs.
#[component]
pub fn SuggestionList(
    /// Suggestions in the order the endpoint returned them.
    items: ReadSignal<Vec<String>>,
    /// Whether the dropdown is open.
    visible: ReadSignal<bool>,
    /// Callback when a suggestion is picked.
    on_pick: impl Fn(String) + 'static + Copy + Send + Sync,
) -> impl IntoView {
    view! {
        <ul class="suggestion-list" class:open=move || visible.get() role="listbox">
            <For
                each=move || items.get().into_iter().enumerate()
                key=|(idx, text): &(usize, String)| (*idx, text.clone())
                children=move |(_, text): (usize, String)| {
                    let value = text.clone();
                    view! {
                        <li
                            class="suggestion-item"
                            role="option"
                            on:mousedown=move |ev: leptos::ev::MouseEvent| {
                                ev.prevent_default();
                                on_pick(value.clone());
                            }
                        >
                            {text}
                        </li>
                    }
                }
            />
        </ul>
    }
}
