pub mod debug;
pub mod time;
