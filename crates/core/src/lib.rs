pub mod config;
pub mod inference;
pub mod matrix;
pub mod session;
pub mod similarity;
pub mod snapshot;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use inference::compose;
pub use matrix::Matrix;
pub use session::ItemIndex;
pub use similarity::{profile_similarities, similarity};
pub use snapshot::{Recommender, Snapshot, SnapshotError};
