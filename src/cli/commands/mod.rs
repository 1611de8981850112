pub mod accounts;
pub mod prefs;
pub mod resolve;
pub mod version;
