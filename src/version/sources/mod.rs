//! Version source implementations

pub mod https;

pub use https::HttpsVersionSource;
