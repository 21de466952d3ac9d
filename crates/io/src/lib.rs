// Dataset I/O operations

pub mod archive;
pub mod table;
pub mod writer;
