pub mod config;
pub mod dataset;
pub mod dates;
pub mod engine;
pub mod error;
pub mod headlines;
pub mod keywords;
pub mod logging;
pub mod page;
pub mod params;
pub mod query;
pub mod stats;
pub mod types;

pub use config::Config;
pub use dataset::Dataset;
pub use engine::{search, SearchOutcome};
pub use error::{Error, Result};
pub use params::Params;
pub use query::{Query, RawQuery, Scope};
pub use stats::{Overview, Statistics};
pub use types::{Article, ContentType, Headline};
