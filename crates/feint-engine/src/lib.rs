//! Fixed-depth minimax search over hypothetical "fake" moves.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::SearchConfig;
pub use error::SearchError;
pub use eval::evaluate;
pub use eval::material::weight;
pub use eval::snapshot::Snapshot;
pub use search::fake::{FakeBoard, FakeMove};
pub use search::moves::{MoveRecord, enumerate_moves};
pub use search::ordering::shuffle;
pub use search::{SearchResult, Searcher};
