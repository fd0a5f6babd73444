mod path_sanitizer;

pub use path_sanitizer::PathSanitizer;
