mod compiler;
mod discovery;
mod error;
mod invoker;
mod report;
mod stage;
mod toolchain;

pub use compiler::ShaderBatchCompiler;
pub use discovery::{discover_shaders, DiscoveryOptions, ShaderSource};
pub use error::DriverError;
pub use invoker::{InvocationOutput, OutputMode, ProcessInvoker, SystemProcessInvoker};
pub use report::{CompileOutcome, CompileReport};
pub use stage::ShaderStage;
pub use toolchain::{Toolchain, DEFAULT_COMPILER, TOOLCHAIN_ROOT_VAR};

#[cfg(test)]
pub(crate) mod test_utils;
