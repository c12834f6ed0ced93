pub mod aggregator;
pub mod generator;
pub mod service;
