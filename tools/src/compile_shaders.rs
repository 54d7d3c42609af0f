use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use log::info;
use shader_build_utils::{
    CompileReport, DriverError, OutputMode, ShaderBatchCompiler, SystemProcessInvoker, Toolchain,
    DEFAULT_COMPILER,
};

/// Compiles every GLSL shader in a directory to SPIR-V with glslangValidator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct CompileShadersArgs {
    /// Directory containing .vert, .frag, .comp, .geom, .tesc and .tese files
    #[arg()]
    target_directory: Option<PathBuf>,

    /// Vulkan SDK root; the compiler is expected in its bin/ folder
    #[arg(long, env = "VULKAN_SDK")]
    toolchain_root: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_COMPILER)]
    compiler: String,

    #[arg(long)]
    recursive: bool,

    /// Don't check that the compiler exists before starting; a missing
    /// compiler then fails every shader instead
    #[arg(long)]
    skip_toolchain_check: bool,

    /// Collect the compiler's output instead of letting it write to the terminal
    #[arg(long)]
    capture_output: bool,

    /// Exit with an error status if any shader fails to compile
    #[arg(long)]
    fail_on_error: bool,
}

impl CompileShadersArgs {
    fn toolchain(&self) -> Result<Toolchain, DriverError> {
        let toolchain = match &self.toolchain_root {
            Some(root) => Toolchain::new(root),
            // Same absolute lookup an unset `$VULKAN_SDK` expands to.
            None if self.skip_toolchain_check => Toolchain::new("/"),
            None => Toolchain::from_env()?,
        };
        Ok(toolchain.with_compiler(&self.compiler))
    }

    fn output_mode(&self) -> OutputMode {
        if self.capture_output {
            OutputMode::Capture
        } else {
            OutputMode::Passthrough
        }
    }
}

fn compile(args: &CompileShadersArgs) -> Result<CompileReport, DriverError> {
    let target_directory = args.target_directory.as_ref().ok_or(DriverError::Usage)?;
    if !target_directory.is_dir() {
        return Err(DriverError::InvalidDirectory(target_directory.clone()));
    }
    let toolchain = args.toolchain()?;
    info!("Using toolchain at {:?}", toolchain.root());

    let mut compiler =
        ShaderBatchCompiler::new(toolchain, SystemProcessInvoker::new(args.output_mode()))
            .recursive(args.recursive)
            .skip_toolchain_check(args.skip_toolchain_check);
    compiler.run(target_directory, &mut std::io::stdout().lock())
}

fn exit_code(args: &CompileShadersArgs, result: &Result<CompileReport, DriverError>) -> i32 {
    match result {
        Ok(report) if args.fail_on_error && !report.is_success() => 1,
        Ok(_) => 0,
        Err(_) => 1,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CompileShadersArgs::parse();

    let result = compile(&args);
    let code = exit_code(&args, &result);
    match result {
        Err(DriverError::Usage) => {
            eprintln!("{}", DriverError::Usage);
            eprintln!("{}", CompileShadersArgs::command().render_usage());
        }
        Err(e) => return Err(e.into()),
        Ok(_) => {}
    }
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
