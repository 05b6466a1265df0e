//! Sub-Category Grid Component
//!
//! 중분류 card grid for the selected 대분류.

use leptos::prelude::*;

use crate::context::NavContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SubCategoryGrid(category: String) -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext should be provided");
    let store = use_app_store();

    let heading = category.clone();
    let names = move || store.catalog().read().sub_category_names(&category);

    view! {
        <div class="screen">
            <header class="screen-header">
                <button class="back-btn" on:click=move |_| ctx.back_to_categories()>
                    "← 대분류로 돌아가기"
                </button>
                <h1 class="screen-title">{heading}</h1>
                <p class="screen-subtitle">"중분류를 선택해주세요"</p>
            </header>

            <div class="category-grid">
                <For
                    each=names
                    key=|name| name.clone()
                    children=move |name| {
                        let label = name.clone();
                        view! {
                            <button
                                class="category-card"
                                on:click=move |_| ctx.select_sub_category(name.clone())
                            >
                                <span class="category-icon">"📖"</span>
                                <span class="category-name">{label}</span>
                                <span class="chevron">"›"</span>
                            </button>
                        }
                    }
                />
            </div>
        </div>
    }
}
