pub mod card;
pub mod state;

pub use card::{matches_query, normalize_query, parse_minutes, sort_order, CardData};
pub use state::{SortMode, UiState, PARAM_QUERY, PARAM_SORT};
