//! Item Card Component
//!
//! One product card: favicon, name, price/target badges, description and the
//! official-website link. The flattened view also shows the category path.

use leptos::prelude::*;

use crate::components::Favicon;
use crate::models::{price_badge_class, target_badge_class, EdutechItem};

/// A single product card
///
/// Props:
/// - item: the record to render
/// - path: (대분류, 중분류, 소분류) badges, shown in the flattened view only
#[component]
pub fn ItemCard(
    item: EdutechItem,
    #[prop(into, optional)] path: Option<(String, String, String)>,
) -> impl IntoView {
    let price_class = format!("badge {}", price_badge_class(&item.price_tier));
    let target_class = format!("badge {}", target_badge_class(&item.target));

    view! {
        <div class="item-card">
            <div class="item-card-head">
                <Favicon website=item.website.clone() alt=item.name.clone() />
                <div class="item-card-titles">
                    <h3 class="item-name">{item.name.clone()}</h3>
                    {path.map(|(category, sub_category, group)| {
                        view! {
                            <div class="path-badges">
                                <span class="badge badge-path">{category}</span>
                                <span class="badge badge-path">{sub_category}</span>
                                <span class="badge badge-path">{group}</span>
                            </div>
                        }
                    })}
                </div>
            </div>

            <div class="item-card-badges">
                <span class=price_class>{item.price_tier.clone()}</span>
                <span class=target_class>{item.target.clone()}</span>
            </div>

            <p class="item-status">{item.status.clone()}</p>
            <p class="item-description">{item.description.clone()}</p>

            <a
                class="visit-btn"
                href=item.website.clone()
                target="_blank"
                rel="noopener noreferrer"
            >
                "웹사이트 방문"
            </a>
        </div>
    }
}
