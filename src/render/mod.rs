/// Reply rendering: text layout, image rasterization, on-disk cache
pub mod cache;
pub mod image;
pub mod text;
