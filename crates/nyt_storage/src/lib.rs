pub mod backends;

pub use backends::*;

pub mod prelude {
    pub use super::backends::*;
    pub use nyt_core::BookmarkStore;
}
