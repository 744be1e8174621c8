mod error;
mod generator;
mod input;
mod paths;
mod rules;
mod sitemap;
mod write;

pub use error::{ErrorKind, SitemapError};
pub use generator::Generator;
