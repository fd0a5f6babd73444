pub mod dom;
pub mod extract;
pub mod fetcher;
pub mod render;
pub mod security;
