mod autocomplete_render;
mod autocomplete_state;
mod binding;
mod dismiss;
mod request;

pub use autocomplete_render::{MAX_VISIBLE_SUGGESTIONS, render_popup};
pub use autocomplete_state::AutocompleteState;
pub use binding::{
    Binding, ContextProvider, Dispatch, ElementLookup, FieldValues, KeyOutcome, SiblingField,
    bind, set_input_value,
};
pub use dismiss::DismissRegistry;
pub use request::{MIN_QUERY_CHARS, build_suggest_url, prepare_query};
