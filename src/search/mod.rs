mod debounce;
mod query;

pub use debounce::Debouncer;
pub use query::QueryState;
