//! Wires a [`SuggestionController`] to the search input on the page.

use std::collections::HashMap;
use std::time::Duration;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlElement, HtmlInputElement, Node};

use super::controller::{Action, SuggestionController, TimerId};
use crate::api;
use crate::components::suggestion_list::SuggestionList;
use crate::config::{Selectors, SuggestConfig};
use crate::dom;
use crate::error::js_message;

#[derive(Clone, Copy)]
struct Binding {
    controller: StoredValue<SuggestionController, LocalStorage>,
    // Browser timeout handles for timers that haven't fired yet.
    timers: StoredValue<HashMap<TimerId, i32>, LocalStorage>,
    input: StoredValue<HtmlInputElement, LocalStorage>,
    container: StoredValue<HtmlElement, LocalStorage>,
    set_items: WriteSignal<Vec<String>>,
    set_visible: WriteSignal<bool>,
}

/// Attach suggestions to the search input. Does nothing when the input or
/// the suggestions container is missing from the page.
pub fn attach(doc: &web_sys::Document, selectors: &Selectors, config: SuggestConfig) {
    let Some(input) = dom::query::<HtmlInputElement>(doc, &selectors.search_input) else {
        debug!("No search input at {}, suggestions disabled", selectors.search_input);
        return;
    };
    let Some(container) = dom::query::<HtmlElement>(doc, &selectors.suggestions) else {
        debug!("No suggestions container at {}, suggestions disabled", selectors.suggestions);
        return;
    };

    let (items, set_items) = signal(Vec::<String>::new());
    let (visible, set_visible) = signal(false);
    container.set_hidden(true);

    let binding = Binding {
        controller: StoredValue::new_local(SuggestionController::new(config)),
        timers: StoredValue::new_local(HashMap::new()),
        input: StoredValue::new_local(input.clone()),
        container: StoredValue::new_local(container.clone()),
        set_items,
        set_visible,
    };

    let on_pick = move |value: String| binding.dispatch(|c| c.select(&value));
    leptos::mount::mount_to(container, move || {
        view! { <SuggestionList items=items visible=visible on_pick=on_pick /> }
    })
    .forget();

    dom::listen(&input, "input", move |_| {
        let value = binding.input.with_value(|i| i.value());
        binding.dispatch(|c| c.input_changed(&value));
    });

    dom::listen(&input, "focus", move |_| {
        let value = binding.input.with_value(|i| i.value());
        binding.dispatch(|c| c.focused(&value));
    });

    dom::listen(doc, "mousedown", move |ev| {
        let Some(node) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let inside = binding.input.with_value(|i| i.contains(Some(&node)))
            || binding.container.with_value(|c| c.contains(Some(&node)));
        if !inside {
            binding.dispatch(|c| c.outside_interaction());
        }
    });

    debug!("Search suggestions attached to {}", selectors.search_input);
}

impl Binding {
    fn dispatch(self, event: impl FnOnce(&mut SuggestionController) -> Vec<Action>) {
        let actions = self.controller.try_update_value(event).unwrap_or_default();
        for action in actions {
            self.run(action);
        }
    }

    fn run(self, action: Action) {
        match action {
            Action::StartTimer { timer, delay } => self.start_timer(timer, delay),
            Action::CancelTimer(timer) => {
                let handle = self.timers.try_update_value(|t| t.remove(&timer)).flatten();
                if let (Some(handle), Some(window)) = (handle, web_sys::window()) {
                    window.clear_timeout_with_handle(handle);
                }
            }
            Action::Fetch { request, url } => {
                debug!("Fetching suggestions from {}", url);
                spawn_local(async move {
                    let result = api::fetch_suggestions(&url).await;
                    self.dispatch(|c| c.response(request, result));
                });
            }
            Action::Render(items) => {
                self.set_items.set(items);
                self.set_visible.set(true);
                self.container.with_value(|c| c.set_hidden(false));
            }
            Action::Hide => {
                self.set_visible.set(false);
                self.set_items.set(Vec::new());
                self.container.with_value(|c| c.set_hidden(true));
            }
            Action::SetInput(value) => self.input.with_value(|i| i.set_value(&value)),
            Action::SubmitForm => match self.input.with_value(|i| i.form()) {
                Some(form) => {
                    if let Err(e) = form.submit() {
                        warn!("Failed to submit search form: {}", js_message(&e));
                    }
                }
                None => debug!("Search input has no enclosing form"),
            },
        }
    }

    fn start_timer(self, timer: TimerId, delay: Duration) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let callback = Closure::once(move || {
            self.timers.update_value(|t| {
                t.remove(&timer);
            });
            self.dispatch(|c| c.debounce_elapsed(timer));
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay.as_millis() as i32,
        ) {
            Ok(handle) => {
                callback.forget();
                self.timers.update_value(|t| {
                    t.insert(timer, handle);
                });
            }
            Err(e) => warn!("Failed to schedule suggestion lookup: {}", js_message(&e)),
        }
    }
}
