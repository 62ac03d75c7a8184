pub mod directory;
pub mod openai_client;
pub mod recommender;
pub mod snapshot;

pub use directory::*;
pub use openai_client::*;
pub use recommender::*;
pub use snapshot::*;
