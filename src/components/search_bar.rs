//! Search Bar Component
//!
//! Free-text search input with debounced commit, clear button, price-tier
//! filter chips and an autocomplete suggestion dropdown.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::store::{
    store_clear_search, store_commit_query, store_toggle_price_filter, use_app_store,
    AppStateStoreFields,
};

/// Milliseconds the input must settle before the query commits
const DEBOUNCE_MS: u32 = 150;

/// Price tier filter chip options
pub const PRICE_TIERS: &[&str] = &[
    "무료",
    "부분 유료",
    "유료",
    "유료(구독)",
    "유료(B2B/B2G)",
    "하드웨어 유료",
    "기업용(B2B)",
];

/// Search input with suggestions
///
/// Keystrokes update the raw input immediately; the query driving the results
/// view commits after a short debounce, on submit, or on suggestion select.
#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();
    let debounce_generation = StoredValue::new(0u32);

    // Top matches for the dropdown, only while it is open
    let suggestions = move || {
        if !store.suggestions_open().get() {
            return Vec::new();
        }
        let input = store.query_input().get();
        store.catalog().read().suggestions(&input)
    };

    let on_input = move |ev: web_sys::Event| {
        let target = ev.target().unwrap();
        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
        let value = input.value();
        store.query_input().set(value.clone());
        store.suggestion_idx().set(0);
        store.suggestions_open().set(true);

        // Commit only once the input settles
        let generation = debounce_generation.get_value() + 1;
        debounce_generation.set_value(generation);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if debounce_generation.get_value() == generation {
                store.query().set(value);
            }
        });
    };

    // Submit commits immediately, preferring the highlighted suggestion
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let sugg = suggestions();
        let sel = store.suggestion_idx().get();
        if sel < sugg.len() {
            store_commit_query(&store, sugg[sel].clone());
        } else {
            store_commit_query(&store, store.query_input().get());
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        let sugg = suggestions();

        match key.as_str() {
            "Tab" => {
                ev.prevent_default();
                let sel = store.suggestion_idx().get();
                if sel < sugg.len() {
                    store_commit_query(&store, sugg[sel].clone());
                }
            }
            "ArrowDown" => {
                ev.prevent_default();
                let sel = store.suggestion_idx().get();
                if sel + 1 < sugg.len() {
                    store.suggestion_idx().set(sel + 1);
                }
            }
            "ArrowUp" => {
                ev.prevent_default();
                let sel = store.suggestion_idx().get();
                if sel > 0 {
                    store.suggestion_idx().set(sel - 1);
                }
            }
            "Escape" => {
                store.suggestions_open().set(false);
            }
            _ => {}
        }
    };

    view! {
        <div class="search-bar">
            <form class="search-form" on:submit=on_submit>
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    class="search-input"
                    placeholder="에듀테크 솔루션 검색..."
                    autocomplete="off"
                    prop:value=move || store.query_input().get()
                    on:input=on_input
                    on:keydown=on_keydown
                />

                {move || {
                    if store.query_input().get().is_empty() {
                        None
                    } else {
                        Some(view! {
                            <button
                                type="button"
                                class="clear-btn"
                                on:click=move |_| store_clear_search(&store)
                            >
                                "×"
                            </button>
                        })
                    }
                }}

                <button
                    type="button"
                    class=move || {
                        if store.filters_open().get() { "filter-btn active" } else { "filter-btn" }
                    }
                    on:click=move |_| store.filters_open().update(|open| *open = !*open)
                >
                    "필터"
                </button>
            </form>

            {move || {
                store
                    .filters_open()
                    .get()
                    .then(|| {
                        view! {
                            <div class="filter-row">
                                {PRICE_TIERS
                                    .iter()
                                    .map(|tier| {
                                        let is_active = move || {
                                            store.price_filter().get().as_deref() == Some(*tier)
                                        };
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    if is_active() {
                                                        "filter-chip active"
                                                    } else {
                                                        "filter-chip"
                                                    }
                                                }
                                                on:click=move |_| store_toggle_price_filter(&store, tier)
                                            >
                                                {*tier}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}

            // Autocomplete suggestions
            {move || {
                let sugg = suggestions();
                if sugg.is_empty() {
                    view! { <div></div> }.into_any()
                } else {
                    let selected = store.suggestion_idx().get();
                    view! {
                        <div class="autocomplete-list">
                            {sugg
                                .into_iter()
                                .enumerate()
                                .map(|(i, name)| {
                                    let name_for_click = name.clone();
                                    let is_selected = i == selected;
                                    view! {
                                        <button
                                            type="button"
                                            class=if is_selected {
                                                "autocomplete-item selected"
                                            } else {
                                                "autocomplete-item"
                                            }
                                            on:click=move |ev| {
                                                ev.prevent_default();
                                                store_commit_query(&store, name_for_click.clone());
                                            }
                                        >
                                            {name}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
