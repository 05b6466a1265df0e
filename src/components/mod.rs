//! UI Components
//!
//! Reusable Leptos components.

mod all_items_view;
mod category_grid;
mod favicon;
mod item_card;
mod item_group_list;
mod search_bar;
mod sub_category_grid;

pub use all_items_view::AllItemsView;
pub use category_grid::CategoryGrid;
pub use favicon::Favicon;
pub use item_card::ItemCard;
pub use item_group_list::ItemGroupList;
pub use search_bar::SearchBar;
pub use sub_category_grid::SubCategoryGrid;
