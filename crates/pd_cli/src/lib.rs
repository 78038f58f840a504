pub mod cli;
pub mod pipeline;

pub use cli::Cli;
pub use pipeline::Pipeline;
