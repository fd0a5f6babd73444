mod dom_view;

pub use dom_view::{element_text, has_class, mod_value, select_within, DomView};
