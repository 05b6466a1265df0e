//! Edutech Atlas Frontend App
//!
//! Root component: holds the navigation state, resolves the four-way view
//! and renders exactly one screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::Catalog;
use crate::components::{AllItemsView, CategoryGrid, ItemGroupList, SearchBar, SubCategoryGrid};
use crate::context::{NavContext, View};
use crate::data;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let catalog = match data::load_catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            web_sys::console::error_1(
                &format!("[APP] Bundled dataset failed to parse: {}", e).into(),
            );
            Catalog::default()
        }
    };
    web_sys::console::log_1(&format!("[APP] Catalog loaded, {} items", catalog.len()).into());

    let store = Store::new(AppState::new(catalog));
    provide_context(store);

    // Navigation state
    let (category, set_category) = signal::<Option<String>>(None);
    let (sub_category, set_sub_category) = signal::<Option<String>>(None);
    let (show_all, set_show_all) = signal(false);
    provide_context(NavContext::new(
        (category, set_category),
        (sub_category, set_sub_category),
        (show_all, set_show_all),
    ));

    let current_view = Memo::new(move |_| {
        let query = store.query().get();
        View::resolve(
            category.get().as_deref(),
            sub_category.get().as_deref(),
            show_all.get(),
            &query,
        )
    });

    view! {
        <div class="page">
            {move || match current_view.get() {
                View::Home => view! { <HomeView /> }.into_any(),
                View::SubCategories(category) => {
                    view! { <SubCategoryGrid category=category /> }.into_any()
                }
                View::Items(category, sub_category) => {
                    view! { <ItemGroupList category=category sub_category=sub_category /> }
                        .into_any()
                }
                View::AllItems => view! { <AllItemsView /> }.into_any(),
            }}
        </div>
    }
}

/// Home screen: hero header, search bar, show-all button and the 대분류 grid
#[component]
fn HomeView() -> impl IntoView {
    let ctx = use_context::<NavContext>().expect("NavContext should be provided");

    view! {
        <div class="screen home">
            <header class="hero">
                <h1 class="hero-title">"2025년 대한민국 에듀테크 종합 목록"</h1>
                <p class="hero-subtitle">
                    "교육 현장에서 활용 가능한 주요 에듀테크 서비스를 한눈에 살펴보세요"
                </p>
                <SearchBar />
                <button class="show-all-btn" on:click=move |_| ctx.show_all_items()>
                    "전체 목록 보기"
                </button>
            </header>

            <CategoryGrid />

            <footer class="page-footer">
                <p>"최종 검증일: 2025년 6월 | 교육 전문가를 위한 종합 가이드"</p>
            </footer>
        </div>
    }
}
