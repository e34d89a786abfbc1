pub mod api_index;

pub use api_index::ApiIndex;
