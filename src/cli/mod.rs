pub mod args;
pub mod banner;
pub mod transform;

pub use args::*;
pub use banner::*;
pub use transform::*;
