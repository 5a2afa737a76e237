pub mod chaining_hashing;
pub mod chaining_hashing_concurrent;
pub mod error;
pub mod long_map;

pub use chaining_hashing::LongHashMap;
pub use chaining_hashing_concurrent::ConcurrentLongHashMap;
pub use error::{Error, Result};
pub use long_map::LongMap;
