pub mod config;
pub mod logging;

pub mod catalog;
pub mod checksum;
pub mod fetch;
pub mod function;
pub mod pipeline;
pub mod storage;
