// Common traits and types
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bucket_lister;
mod bucket_sizer;
mod client_config;
mod region;
mod storage_type;
mod storage_type_size;

pub use bucket_lister::*;
pub use bucket_sizer::*;
pub use client_config::*;
pub use region::*;
pub use storage_type::*;
pub use storage_type_size::*;

// Bucket names in the order that S3 returned them.
pub type BucketNames = Vec<String>;
