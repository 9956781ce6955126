use super::cmdline::{serialize_with_program, split};
use super::rewrite::rewrite;
use super::types::{Rewrite, TranslateOptions};
use std::path::{Path, PathBuf};

/// Everything needed to log and launch one proxied run
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Real ffmpeg executable
    pub program: PathBuf,
    pub rewrite: Rewrite,
    /// How the proxy itself was called, for the run log
    pub original_cmd: String,
    /// Executable path plus rewritten arguments
    pub final_cmd: String,
}

impl Invocation {
    /// Rewrite `args` and serialize both command lines. Performs no I/O.
    pub fn prepare(
        invoked_as: &str,
        args: &[String],
        program: &Path,
        opts: &TranslateOptions,
    ) -> Self {
        let rewrite = rewrite(args, opts);
        let program_str = program.to_string_lossy();

        Self {
            original_cmd: serialize_with_program(invoked_as, args),
            final_cmd: serialize_with_program(&program_str, &rewrite.args),
            program: program.to_path_buf(),
            rewrite,
        }
    }

    pub fn args(&self) -> &[String] {
        &self.rewrite.args
    }

    /// Final command line split back into tokens, program first
    pub fn final_tokens(&self) -> Vec<String> {
        split(&self.final_cmd)
    }
}
