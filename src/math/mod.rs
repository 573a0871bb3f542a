mod color;

pub use color::Pixel;
