pub mod record;
pub mod search_response;

pub use record::Record;
pub use search_response::SearchResponse;
