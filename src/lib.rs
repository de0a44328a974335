//! Load whole files into memory when their size is not known up front.
//!
//! ```no_run
//! let shader = fs_readall::read_all("shaders/vertex_shader.glsl")?;
//! println!("{} bytes", shader.len());
//! # Ok::<(), fs_readall::ReadError>(())
//! ```

mod buffer;
mod errors;
mod options;
mod reader;

pub use buffer::{ReadStats, ResourceBuffer};
pub use errors::{ReadError, Result};
pub use options::ReadOptions;
pub use reader::{read_all, GrowthObserver, WholeReader};

/// Capacity of the first buffer allocated for a resource, in bytes.
pub const INITIAL_CAPACITY: usize = 240;

/// Byte written right after the populated region of every loaded buffer.
pub const TERMINATOR: u8 = 0;

/// Factor applied to the capacity each time a fill saturates the buffer.
pub const GROWTH_FACTOR: usize = 2;
