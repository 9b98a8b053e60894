pub mod display;
pub mod palette;
pub mod poll;
pub mod types;
