pub mod config;
pub mod error;
pub mod metrics;
pub mod poller;
pub mod sampler;
pub mod snapshot;

pub use config::Config;
pub use error::{Error, Result};
pub use poller::{FailurePolicy, Poller};
pub use sampler::Sampler;
pub use snapshot::SystemSnapshot;
