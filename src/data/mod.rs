//! Data module - CSV loading and sample generation

mod loader;
mod sample;

pub use loader::{is_numeric, DataLoader, DataSource};
pub use sample::SampleGenerator;
