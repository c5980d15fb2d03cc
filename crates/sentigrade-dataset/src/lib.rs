pub mod dataset;

pub use dataset::{LabeledDataset, LabeledSample};
