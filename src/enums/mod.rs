pub mod completeness;
pub mod sort_key;
pub mod sort_order;
