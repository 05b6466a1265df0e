//! Category Grid Component
//!
//! 대분류 card grid on the home screen.

use leptos::prelude::*;

use crate::context::NavContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Clickable 대분류 cards
#[component]
pub fn CategoryGrid() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext should be provided");
    let store = use_app_store();

    view! {
        <div class="category-grid">
            <For
                each=move || store.catalog().read().category_names()
                key=|name| name.clone()
                children=move |name| {
                    let label = name.clone();
                    view! {
                        <button
                            class="category-card"
                            on:click=move |_| ctx.select_category(name.clone())
                        >
                            <span class="category-icon">"▦"</span>
                            <span class="category-name">{label}</span>
                            <span class="chevron">"›"</span>
                        </button>
                    }
                }
            />
        </div>
    }
}
