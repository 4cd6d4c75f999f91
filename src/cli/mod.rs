pub mod args;
pub mod encode;
pub mod shell;
pub mod status;

pub use args::*;
pub use encode::*;
pub use shell::*;
pub use status::*;
