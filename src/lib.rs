pub mod commands;
pub mod iconset;
pub mod resize;
pub mod utils;
