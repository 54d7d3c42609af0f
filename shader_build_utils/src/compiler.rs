use std::{io::Write, path::Path};

use log::{error, info, warn};

use crate::{
    discover_shaders, CompileReport, DiscoveryOptions, DriverError, ProcessInvoker, Toolchain,
};

/// Compiles every shader in a directory to SPIR-V, one compiler process at a time.
///
/// A shader that fails to compile never stops the batch: it is recorded in the
/// returned [`CompileReport`] and listed in the summary written to `out`.
pub struct ShaderBatchCompiler<I: ProcessInvoker> {
    toolchain: Toolchain,
    invoker: I,
    discovery: DiscoveryOptions,
    skip_toolchain_check: bool,
}

impl<I: ProcessInvoker> ShaderBatchCompiler<I> {
    pub fn new(toolchain: Toolchain, invoker: I) -> Self {
        Self {
            toolchain,
            invoker,
            discovery: DiscoveryOptions::default(),
            skip_toolchain_check: false,
        }
    }

    pub fn recursive(mut self, recursive: bool) -> Self {
        self.discovery = self.discovery.recursive(recursive);
        self
    }

    /// When set, a missing compiler is reported once per shader instead of
    /// aborting the run.
    pub fn skip_toolchain_check(mut self, skip: bool) -> Self {
        self.skip_toolchain_check = skip;
        self
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    pub fn run(
        &mut self,
        target_directory: &Path,
        out: &mut impl Write,
    ) -> Result<CompileReport, DriverError> {
        let sources = discover_shaders(target_directory, self.discovery)?;
        if !self.skip_toolchain_check {
            self.toolchain.validate()?;
        }

        let compiler = self.toolchain.compiler_path();
        info!("Compiling with {compiler:?}");

        let mut report = CompileReport::default();
        for source in sources {
            writeln!(out, "\n-------- {} --------\n", source.path.display())?;
            out.flush()?;

            let args = self.toolchain.compile_args(&source.path);
            let succeeded = match self.invoker.invoke(&compiler, &args) {
                Ok(output) => {
                    out.write_all(&output.stdout)?;
                    out.write_all(&output.stderr)?;
                    if !output.success() {
                        warn!(
                            "Compiling {} shader {:?} failed with exit code {:?}",
                            source.stage, source.path, output.exit_code
                        );
                    }
                    output.success()
                }
                Err(e) => {
                    error!("While compiling {:?}: {e:?}", source.path);
                    false
                }
            };
            report.record(source, succeeded);
        }

        report.write_summary(out)?;
        Ok(report)
    }
}
