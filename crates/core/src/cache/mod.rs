mod error;
mod keys;
mod patterns;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{
    is_shift_range_key, parse_shift_range_key, range_tracking_key, reference_key, shift_key,
    shift_range_key, shift_range_pattern, user_key,
};
pub use patterns::pattern_matches;
pub use serialization::{from_cache_bytes, to_cache_bytes, SerializationError};
pub use traits::Cache;
