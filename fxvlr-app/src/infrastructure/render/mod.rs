mod escape;
mod meta_renderer;

pub use escape::{escape_html, truncate_chars};
pub use meta_renderer::{MetaRenderer, RenderOptions};
