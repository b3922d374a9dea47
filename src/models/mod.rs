pub mod catalog;
pub mod slide;
pub mod slide_image;
