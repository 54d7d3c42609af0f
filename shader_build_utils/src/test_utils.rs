use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use crate::{InvocationOutput, ProcessInvoker};

/// A throwaway directory under the system temp dir, removed on drop.
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    pub fn new(name: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "shader_build_utils_{name}_{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&path);
        fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn touch(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.path.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "#version 450\nvoid main() {}\n").unwrap();
        path
    }

    pub fn mkdir(&self, relative: impl AsRef<Path>) -> PathBuf {
        let path = self.path.join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// Stands in for the shader compiler: records every call and fails the
/// shaders whose file names it was told to fail.
#[derive(Default)]
pub struct RecordingInvoker {
    pub calls: Vec<(PathBuf, Vec<OsString>)>,
    failing: Vec<OsString>,
    spawn_error: bool,
    stdout: Vec<u8>,
}

impl RecordingInvoker {
    pub fn failing<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            failing: names.into_iter().map(OsString::from).collect(),
            ..Default::default()
        }
    }

    pub fn unable_to_spawn(mut self) -> Self {
        self.spawn_error = true;
        self
    }

    pub fn with_stdout(mut self, stdout: &str) -> Self {
        self.stdout = stdout.as_bytes().to_vec();
        self
    }
}

impl ProcessInvoker for RecordingInvoker {
    fn invoke(&mut self, program: &Path, args: &[OsString]) -> anyhow::Result<InvocationOutput> {
        self.calls.push((program.to_path_buf(), args.to_vec()));
        if self.spawn_error {
            anyhow::bail!("Could not execute {:?}", program);
        }

        let input = Path::new(&args[1]);
        let fails = input
            .file_name()
            .is_some_and(|name| self.failing.iter().any(|f| f == name));
        Ok(InvocationOutput {
            exit_code: Some(if fails { 1 } else { 0 }),
            stdout: self.stdout.clone(),
            stderr: vec![],
        })
    }
}
