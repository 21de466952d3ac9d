// Core postal types and logic - no I/O in this crate

pub mod address;
pub mod entry;
pub mod merge;
pub mod normalize;
pub mod partition;
pub mod sanitize;

pub use entry::{JaRecord, PostalEntry, RomeRecord};
pub use merge::{merge_tables, MergeStats};
pub use normalize::normalize_romaji;
pub use partition::{partition_by_prefix, partition_file_name, Partition, PREFIX_LEN};
