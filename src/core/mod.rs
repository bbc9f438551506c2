pub mod config;
pub mod error;
pub mod totals;
pub mod words;

pub use config::*;
pub use error::*;
pub use totals::*;
pub use words::amount_in_words;
