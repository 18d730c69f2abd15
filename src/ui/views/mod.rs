pub mod clean;
pub mod render;
pub mod watch;
