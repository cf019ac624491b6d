//! Configuration from environment variables.

pub mod db;
