use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use crate::DriverError;

pub const TOOLCHAIN_ROOT_VAR: &str = "VULKAN_SDK";
pub const DEFAULT_COMPILER: &str = "glslangValidator";

/// Location of the external SPIR-V compiler, `<root>/bin/<compiler>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toolchain {
    root: PathBuf,
    compiler: String,
}

impl Toolchain {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            compiler: DEFAULT_COMPILER.to_owned(),
        }
    }

    pub fn with_compiler(mut self, compiler: impl Into<String>) -> Self {
        self.compiler = compiler.into();
        self
    }

    pub fn from_env() -> Result<Self, DriverError> {
        Self::from_root_var(std::env::var_os(TOOLCHAIN_ROOT_VAR))
    }

    fn from_root_var(root: Option<OsString>) -> Result<Self, DriverError> {
        match root {
            Some(root) if !root.is_empty() => Ok(Self::new(root)),
            _ => Err(DriverError::ToolchainNotFound(
                Self::new(format!("${TOOLCHAIN_ROOT_VAR}")).compiler_path(),
            )),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn compiler_path(&self) -> PathBuf {
        self.root
            .join("bin")
            .join(format!("{}{}", self.compiler, std::env::consts::EXE_SUFFIX))
    }

    pub fn validate(&self) -> Result<(), DriverError> {
        let compiler = self.compiler_path();
        if compiler.is_file() {
            Ok(())
        } else {
            Err(DriverError::ToolchainNotFound(compiler))
        }
    }

    /// `-V <input> -o <input>.spv`
    pub fn compile_args(&self, input: &Path) -> Vec<OsString> {
        vec![
            "-V".into(),
            input.as_os_str().to_owned(),
            "-o".into(),
            spirv_output_path(input).into_os_string(),
        ]
    }
}

pub(crate) fn spirv_output_path(input: &Path) -> PathBuf {
    let mut output = input.as_os_str().to_owned();
    output.push(".spv");
    PathBuf::from(output)
}
