pub mod content;
pub mod crew;
pub mod error;
pub mod output;

#[cfg(test)]
mod tests;

pub use crew::{Crew, CrewEngine, Process};
pub use error::CrewError;
pub use output::{CrewOutput, KickoffOutput, TaskOutput};
