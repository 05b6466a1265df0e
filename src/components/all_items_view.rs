//! All Items View Component
//!
//! Flattened card grid over the whole catalog. Doubles as the search-results
//! screen whenever a query is committed; an active price-tier chip narrows
//! the list further.

use leptos::prelude::*;

use crate::components::{ItemCard, SearchBar};
use crate::context::NavContext;
use crate::models::FlatItem;
use crate::store::{store_clear_search, use_app_store, AppStateStoreFields};

#[component]
pub fn AllItemsView() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext should be provided");
    let store = use_app_store();

    let results = move || -> Vec<FlatItem> {
        let query = store.query().get();
        let hits = store.catalog().read().search(&query);
        match store.price_filter().get() {
            Some(tier) => hits.into_iter().filter(|f| f.item.price_tier == tier).collect(),
            None => hits,
        }
    };

    let heading = move || {
        let query = store.query().get();
        if query.trim().is_empty() {
            "2025년 대한민국 에듀테크 종합 목록".to_string()
        } else {
            format!("'{}' 검색 결과", query.trim())
        }
    };

    view! {
        <div class="screen">
            <header class="screen-header">
                <button
                    class="back-btn"
                    on:click=move |_| {
                        store_clear_search(&store);
                        ctx.back_to_categories();
                    }
                >
                    "홈으로 돌아가기"
                </button>
                <h1 class="screen-title">{heading}</h1>
                <p class="screen-subtitle">
                    {move || format!("총 {}개의 에듀테크 서비스", results().len())}
                </p>
                <SearchBar />
            </header>

            {move || {
                let hits = results();
                if hits.is_empty() {
                    view! { <p class="empty-state">"검색 결과가 없습니다."</p> }.into_any()
                } else {
                    view! {
                        <div class="item-grid">
                            {hits
                                .into_iter()
                                .map(|flat| {
                                    let path = (
                                        flat.category.clone(),
                                        flat.sub_category.clone(),
                                        flat.group.clone(),
                                    );
                                    view! { <ItemCard item=flat.item path=path /> }
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
