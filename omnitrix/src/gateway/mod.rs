mod api;
mod source;


pub use api::ApiClient;
pub use source::{or_fallback, or_try_fallback, AlienSource};
