//! Presentational components for the placement and search screens.

pub mod design_picker;
pub mod furniture_library;
pub mod furniture_picker;
pub mod product_grid;
pub mod query_list;
pub mod result_card;
pub mod room_uploader;
pub mod toast_stack;
