pub mod console;
pub mod pages;

pub use pages::{AssetUrls, HomePage, SearchPage};
