use std::{io::Write, path::Path};

use crate::ShaderSource;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompileOutcome {
    pub source: ShaderSource,
    pub succeeded: bool,
}

/// Outcomes of one batch, in the order the shaders were compiled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileReport {
    outcomes: Vec<CompileOutcome>,
}

impl CompileReport {
    pub(crate) fn record(&mut self, source: ShaderSource, succeeded: bool) {
        self.outcomes.push(CompileOutcome { source, succeeded });
    }

    pub fn outcomes(&self) -> &[CompileOutcome] {
        &self.outcomes
    }

    pub fn failures(&self) -> impl Iterator<Item = &Path> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.succeeded)
            .map(|outcome| outcome.source.path.as_path())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn compiled_count(&self) -> usize {
        self.outcomes.len() - self.failure_count()
    }

    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }

    pub fn write_summary(&self, out: &mut impl Write) -> std::io::Result<()> {
        writeln!(out, "\n-------- Compilation result --------\n")?;
        if self.is_success() {
            writeln!(out, "SUCCESS: All shaders compiled to SPIR-V")?;
        } else {
            writeln!(
                out,
                "ERROR: {} shader(s) could not be compiled:\n",
                self.failure_count()
            )?;
            for failed in self.failures() {
                writeln!(out, "\t{}", failed.display())?;
            }
        }
        Ok(())
    }
}

impl FromIterator<CompileOutcome> for CompileReport {
    fn from_iter<T: IntoIterator<Item = CompileOutcome>>(iter: T) -> Self {
        Self {
            outcomes: iter.into_iter().collect(),
        }
    }
}
