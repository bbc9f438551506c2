pub mod helpers;
pub mod store;

pub use store::TemplateStore;
