pub mod catalog;
pub mod filter;
pub mod order;
pub mod route;
pub mod slug;
pub mod state;

pub use catalog::{FilterState, MenuDocument, Product, ALL_CATEGORY};
pub use filter::visible_products;
pub use order::{distinct_categories, resolve_order};
pub use route::{hash_for_category, parse_hash, Route};
pub use slug::slugify;
pub use state::{AppEvent, MenuState};
