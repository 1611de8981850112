pub mod flag;
pub mod keys;
pub mod store;

pub use flag::StoredFlag;
pub use store::PreferenceStore;
