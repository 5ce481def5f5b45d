//! Random share secrets.

pub mod generator;

pub use generator::SecretGenerator;
