pub mod renderer;

pub use renderer::{CommandRenderer, PageRenderer};
