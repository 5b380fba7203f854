pub mod agent;
pub mod capture;
pub mod crew;
pub mod llm;
pub mod pipeline;
pub mod settings;
pub mod task;

#[cfg(test)]
pub(crate) mod testing;

pub use agent::*;
pub use crew::*;
pub use pipeline::*;
pub use task::*;
