//! Video normalization module

pub mod copy;

pub use copy::VideoCopier;
