//! Item Group List Component
//!
//! Leaf drill-down screen: one titled section per 소분류 of the selected
//! (대분류, 중분류), each with a card grid of its items.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::context::NavContext;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemGroupList(category: String, sub_category: String) -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext should be provided");
    let store = use_app_store();

    let title = format!("{} → {}", category, sub_category);
    let back_label = format!("← {}", category);
    let groups = {
        let category = category.clone();
        let sub_category = sub_category.clone();
        move || store.catalog().read().groups(&category, &sub_category)
    };

    view! {
        <div class="screen">
            <header class="screen-header">
                <div class="back-row">
                    <button class="back-btn" on:click=move |_| ctx.back_to_categories()>
                        "홈"
                    </button>
                    <button class="back-btn" on:click=move |_| ctx.back_to_sub_categories()>
                        {back_label}
                    </button>
                </div>
                <h1 class="screen-title">{title}</h1>
                <p class="screen-subtitle">"에듀테크 서비스 목록"</p>
            </header>

            <div class="group-sections">
                <For
                    each=groups
                    key=|group| group.name.clone()
                    children=move |group| {
                        view! {
                            <section class="group-section">
                                <h2 class="group-title">{group.name.clone()}</h2>
                                <div class="item-grid">
                                    {group
                                        .items
                                        .into_iter()
                                        .map(|item| view! { <ItemCard item=item /> })
                                        .collect_view()}
                                </div>
                            </section>
                        }
                    }
                />
            </div>
        </div>
    }
}
