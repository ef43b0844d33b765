//! pinecheck_program: Check orchestration.
//!
//! Collects the files of one run, scans them independently on a rayon
//! pool and concatenates the results in input order.

use pinecheck_diagnostics::DiagnosticCollection;
use pinecheck_discovery::{discover_source_files, load_source_file, LoadError, SourceFile};
use pinecheck_options::CheckOptions;
use rayon::prelude::*;
use std::path::PathBuf;
use thiserror::Error;

/// Process exit status of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// No diagnostics.
    Success,
    /// Diagnostics were found, or there was nothing to check.
    Failure,
    /// A file or the configuration could not be loaded.
    Fatal,
}

impl ExitStatus {
    pub fn code(self) -> i32 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Fatal => 2,
        }
    }
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// One unit of work: a file on disk or text already in memory.
#[derive(Debug, Clone)]
enum Input {
    Path(PathBuf),
    Source(SourceFile),
}

/// The outcome of checking every input of a program.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// All diagnostics, file by file in input order.
    pub diagnostics: DiagnosticCollection,
    /// Files that could not be loaded, in input order.
    pub load_errors: Vec<LoadError>,
    /// Number of files that were loaded and scanned.
    pub files_checked: usize,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors() || !self.load_errors.is_empty()
    }

    pub fn exit_status(&self) -> ExitStatus {
        if !self.load_errors.is_empty() {
            ExitStatus::Fatal
        } else if self.diagnostics.has_errors() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

/// The set of files checked in one run.
pub struct Program {
    /// Check options.
    pub options: CheckOptions,
    inputs: Vec<Input>,
}

impl Program {
    /// Create an empty program.
    pub fn new(options: CheckOptions) -> Self {
        Self {
            options,
            inputs: Vec::new(),
        }
    }

    /// Create a program from command-line style inputs (files or
    /// directories; none means the current directory).
    pub fn discover(inputs: &[PathBuf], options: CheckOptions) -> Self {
        let files = discover_source_files(inputs, &options);
        let mut program = Self::new(options);
        program.add_root_files(files);
        program
    }

    /// Add an in-memory source file.
    pub fn add_source(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.inputs.push(Input::Source(SourceFile::new(path, text)));
    }

    /// Add files to be read from disk when checking.
    pub fn add_root_files(&mut self, files: impl IntoIterator<Item = PathBuf>) {
        self.inputs.extend(files.into_iter().map(Input::Path));
    }

    /// The files of this program, in check order.
    pub fn file_names(&self) -> Vec<PathBuf> {
        self.inputs
            .iter()
            .map(|input| match input {
                Input::Path(path) => path.clone(),
                Input::Source(source) => source.path.clone(),
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Load and scan every file. Files are independent, so they are
    /// processed in parallel; results keep the input order.
    pub fn check(&self) -> Result<CheckReport, ProgramError> {
        let outcomes = match self.options.jobs {
            Some(jobs) => {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
                pool.install(|| self.check_all())
            }
            None => self.check_all(),
        };

        let mut report = CheckReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(diagnostics) => {
                    report.files_checked += 1;
                    report.diagnostics.extend(diagnostics);
                }
                Err(err) => {
                    tracing::debug!(file = %err.path().display(), error = %err, "failed to load file");
                    report.load_errors.push(err);
                }
            }
        }

        tracing::debug!(
            files = report.files_checked,
            diagnostics = report.diagnostics.len(),
            load_errors = report.load_errors.len(),
            "check finished"
        );
        Ok(report)
    }

    fn check_all(&self) -> Vec<Result<DiagnosticCollection, LoadError>> {
        self.inputs.par_iter().map(check_input).collect()
    }
}

fn check_input(input: &Input) -> Result<DiagnosticCollection, LoadError> {
    match input {
        Input::Path(path) => {
            let source = load_source_file(path)?;
            Ok(check_source(&source))
        }
        Input::Source(source) => Ok(check_source(source)),
    }
}

/// Scan one loaded file.
pub fn check_source(source: &SourceFile) -> DiagnosticCollection {
    pinecheck_scanner::check_text(&source.text, &source.display_name())
}
