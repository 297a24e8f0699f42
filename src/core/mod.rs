pub mod services;
pub mod source;
pub mod time;
pub mod utils;
