mod binding;
mod controller;

pub use binding::attach;
pub use controller::{Action, RequestId, SuggestState, SuggestionController, TimerId};
