mod generate_preview;

pub use generate_preview::GeneratePreview;
