pub mod tenant;
pub mod time;
