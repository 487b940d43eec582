//! Filter dropdown whose selection lives in the query string
//!
//! ```ignore
//! FilterDropdown {
//!     param: "genre",
//!     label: "Genre",
//!     multiple: true,
//!     options: vec![FilterOption::new("rock", "Rock"), FilterOption::new("jazz", "Jazz")],
//! }
//! ```
//!
//! Must be rendered below a component that called `use_query_state_provider`.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use qstate_core::{Navigator, ParamValue, QueryStateStore};

use crate::hooks::use_query_state;
use crate::wasm_utils::DismissListener;

/// Counter for generating unique container IDs
static FILTER_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// One selectable value
#[derive(Clone, Debug, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Apply a click on `value`.
///
/// Multi-select toggles membership. Single-select replaces the value, and
/// picking the current value again clears it.
pub fn choose_option<N: Navigator>(
    store: &QueryStateStore<N>,
    param: &str,
    value: &str,
    multiple: bool,
) {
    if multiple {
        store.toggle_param(param, value);
    } else if store.get_param_value(param).contains(value) {
        store.set_param(param, ParamValue::Absent);
    } else {
        store.set_param(param, value);
    }
}

/// Text for the trigger button: the label alone, the label with the chosen
/// option, or the label with a count.
pub fn selection_summary(label: &str, options: &[FilterOption], selected: &ParamValue) -> String {
    let chosen: Vec<&FilterOption> = options
        .iter()
        .filter(|o| selected.contains(&o.value))
        .collect();
    match chosen.as_slice() {
        [] => label.to_string(),
        [only] => format!("{}: {}", label, only.label),
        many => format!("{} ({})", label, many.len()),
    }
}

#[component]
pub fn FilterDropdown(
    /// Query parameter holding the selection
    param: String,
    /// Trigger label
    label: String,
    options: Vec<FilterOption>,
    /// Allow more than one selected value
    #[props(default)]
    multiple: bool,
) -> Element {
    let store = use_query_state();
    let mut is_open = use_signal(|| false);
    let mut dismiss: Signal<Option<DismissListener>> = use_signal(|| None);

    let container_id = use_hook(|| {
        let id = FILTER_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("filter-dropdown-{}", id)
    });

    // Attach the outside-click listener only while open
    let dismiss_id = container_id.clone();
    use_effect(move || {
        if is_open() {
            dismiss.set(DismissListener::new(&dismiss_id, move || is_open.set(false)));
        } else {
            dismiss.set(None);
        }
    });

    let selected = store.get_param_value(&param);
    let summary = selection_summary(&label, &options, &selected);
    let has_selection = !selected.values().is_empty();
    let clear_param = param.clone();

    rsx! {
        div { id: "{container_id}", class: "relative inline-block",
            button {
                class: "inline-flex items-center gap-2 text-sm rounded-lg px-3 py-1.5 border border-gray-600 text-gray-300 hover:border-gray-500 hover:text-white",
                onclick: move |_| is_open.set(!is_open()),
                span { class: "truncate", "{summary}" }
            }
            if is_open() {
                div { class: "absolute left-0 mt-1 bg-gray-900 rounded-lg shadow-xl border border-white/5 p-1 min-w-[160px] z-10",
                    for option in options.iter() {
                        FilterOptionRow {
                            key: "{option.value}",
                            param: param.clone(),
                            option: option.clone(),
                            selected: selected.contains(&option.value),
                            multiple,
                            on_chosen: move |_| is_open.set(false),
                        }
                    }
                    if has_selection {
                        button {
                            class: "w-full text-left text-xs px-3 py-1.5 text-gray-400 hover:text-white border-t border-white/5 mt-1",
                            onclick: move |_| {
                                store.clear_params(&[clear_param.as_str()]);
                                is_open.set(false);
                            },
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn FilterOptionRow(
    param: String,
    option: FilterOption,
    selected: bool,
    multiple: bool,
    on_chosen: EventHandler<()>,
) -> Element {
    let store = use_query_state();
    let value = option.value.clone();

    rsx! {
        button {
            class: "w-full flex items-center gap-2 text-left text-sm px-3 py-1.5 rounded text-gray-300 hover:bg-gray-700/50",
            onclick: move |_| {
                choose_option(&store, &param, &value, multiple);
                if !multiple {
                    on_chosen.call(());
                }
            },
            span { class: "w-4 text-center",
                if selected {
                    "✓"
                }
            }
            span { "{option.label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qstate_core::{EncodedValue, MemoryNavigator};

    fn options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("rock", "Rock"),
            FilterOption::new("jazz", "Jazz"),
            FilterOption::new("hip hop", "Hip Hop"),
        ]
    }

    #[test]
    fn test_summary_without_selection() {
        assert_eq!(selection_summary("Genre", &options(), &ParamValue::Absent), "Genre");
    }

    #[test]
    fn test_summary_single() {
        let selected = ParamValue::from("hip hop");
        assert_eq!(selection_summary("Genre", &options(), &selected), "Genre: Hip Hop");
    }

    #[test]
    fn test_summary_count_ignores_unknown_values() {
        let selected = ParamValue::from(["jazz", "rock", "polka"]);
        assert_eq!(selection_summary("Genre", &options(), &selected), "Genre (2)");
    }

    #[test]
    fn test_choose_multiple_toggles() {
        let nav = MemoryNavigator::from_href("/albums");
        let store = QueryStateStore::with_defaults(nav.clone());
        choose_option(&store, "genre", "rock", true);
        choose_option(&store, "genre", "jazz", true);
        assert_eq!(
            nav.current_address().query.get("genre"),
            Some(&EncodedValue::from(vec!["rock", "jazz"]))
        );
        choose_option(&store, "genre", "rock", true);
        assert_eq!(store.get_param_value("genre"), ParamValue::from(["jazz"]));
    }

    #[test]
    fn test_choose_single_replaces_and_clears() {
        let nav = MemoryNavigator::from_href("/albums?sort=year");
        let store = QueryStateStore::with_defaults(nav.clone());
        choose_option(&store, "sort", "title", false);
        assert_eq!(store.get_param_value("sort"), ParamValue::from("title"));

        choose_option(&store, "sort", "title", false);
        assert_eq!(store.get_param_value("sort"), ParamValue::Absent);
    }
}
