pub mod index;
pub mod query;
pub mod tokenizer;

pub use index::{DocId, Index, Posting};
pub use query::{search, Hit, MAX_RESULTS};
