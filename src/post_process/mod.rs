pub mod output;
pub mod summary;

pub use output::{OutputTarget, write_output};
pub use summary::summarize;
