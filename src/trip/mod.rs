//! Trip data structures and labeled dataset loading

mod data;
pub mod loader;

pub use data::{LabeledCase, TripInput};
pub use loader::{
    load_cases, load_cases_from_csv_reader, load_cases_from_reader, load_default_cases,
    DEFAULT_DATASET_PATH,
};
