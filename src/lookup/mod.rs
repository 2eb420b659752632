//! Debounced company lookup
//!
//! The debouncer settles keystroke bursts into a single query; the lookup
//! state stamps requests with generations so stale replies are discarded.

mod debounce;
mod lookup_state;

pub use debounce::Debouncer;
pub use lookup_state::LookupState;
