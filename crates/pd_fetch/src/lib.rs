pub mod source;

pub use source::HttpContentSource;

pub mod prelude {
    pub use super::source::HttpContentSource;
    pub use pd_core::{ContentSource, FetchedContent, Result, Error};
}
