pub mod artwork;
pub mod gallery;

pub use artwork::{Artwork, AspectRatio};
pub use gallery::Gallery;
