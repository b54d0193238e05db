//! Error and diagnostic plumbing.
//!
//! `LinkError` covers parse/IO failures with `From` impls for
//! `io::Error` and `scroll::Error`. Beyond that, this module carries the
//! linker's diagnostic accumulator: `Error`-severity diagnostics are
//! recorded per-site and do not abort the current stage, while `Fatal`
//! aborts immediately by returning `Err` out of the stage.

use std::fmt;
use std::sync::Mutex;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkError>;

#[derive(Debug, Error)]
pub enum LinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed ELF data: {0}")]
    Scroll(#[from] scroll::Error),

    #[error("invalid magic number: 0x{0:x}")]
    BadMagic(u64),

    #[error("malformed input: {0}")]
    Malformed(String),

    #[error("unsupported target machine {0}")]
    UnsupportedMachine(u16),

    #[error("relocation {reloc} against `{symbol}` is out of range: {detail}")]
    RelocOverflow {
        reloc: &'static str,
        symbol: String,
        detail: String,
    },

    #[error("{0} undefined symbol(s)")]
    UndefinedSymbols(usize),

    #[error("{0}")]
    Fatal(String),
}

/// Severity of a single diagnostic. Both variants are diagnostic-only
/// and never change the exit status by themselves; `Diagnostics`
/// decides exit status by counting them at `checkpoint()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warn,
}

#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.severity {
            Severity::Error => "error",
            Severity::Warn => "warning",
        };
        write!(f, "mallard: {kind}: {}", self.message)
    }
}

/// Accumulates non-fatal diagnostics across the worker pool. `checkpoint`
/// is called at the end of each pipeline stage; if any `Error`-severity
/// diagnostic was recorded, the stage fails the whole link with exit
/// status 1.
#[derive(Default)]
pub struct Diagnostics {
    records: Mutex<Vec<Diagnostic>>,
    fatal_warnings: std::sync::atomic::AtomicBool,
}

impl Diagnostics {
    pub fn new(fatal_warnings: bool) -> Self {
        Diagnostics {
            records: Mutex::new(Vec::new()),
            fatal_warnings: std::sync::atomic::AtomicBool::new(fatal_warnings),
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.records.lock().unwrap().push(Diagnostic {
            severity: Severity::Error,
            message: message.into(),
        });
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.records.lock().unwrap().push(Diagnostic {
            severity: Severity::Warn,
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        let fatal_warnings = self.fatal_warnings.load(std::sync::atomic::Ordering::Relaxed);
        self.records
            .lock()
            .unwrap()
            .iter()
            .any(|d| d.severity == Severity::Error || (fatal_warnings && d.severity == Severity::Warn))
    }

    /// Print accumulated diagnostics to stderr and clear them. Returns
    /// `Err` if the stage should abort the link.
    pub fn checkpoint(&self) -> Result<()> {
        let mut records = self.records.lock().unwrap();
        let mut error_count = 0usize;
        let fatal_warnings = self.fatal_warnings.load(std::sync::atomic::Ordering::Relaxed);
        for record in records.drain(..) {
            let is_error = record.severity == Severity::Error
                || (fatal_warnings && record.severity == Severity::Warn);
            if is_error {
                error_count += 1;
            }
            eprintln!("{record}");
        }
        if error_count > 0 {
            return Err(LinkError::Fatal(format!(
                "{error_count} error(s) encountered"
            )));
        }
        Ok(())
    }
}

/// Aggregates "referenced by" sites per undefined symbol name so errors
/// are reported once per symbol with a bounded number of call sites.
#[derive(Default)]
pub struct UndefRegistry {
    sites: Mutex<std::collections::HashMap<String, Vec<String>>>,
    max_sites: usize,
}

impl UndefRegistry {
    pub fn new(max_sites: usize) -> Self {
        UndefRegistry {
            sites: Mutex::new(std::collections::HashMap::new()),
            max_sites,
        }
    }

    pub fn record(&self, symbol: &str, referenced_by: String) {
        self.sites
            .lock()
            .unwrap()
            .entry(symbol.to_string())
            .or_default()
            .push(referenced_by);
    }

    /// Render the aggregate report; does not itself decide severity —
    /// the caller maps it through [`Diagnostics`] according to
    /// `--unresolved-symbols`/`-z defs`.
    pub fn report(&self) -> Vec<String> {
        let sites = self.sites.lock().unwrap();
        let mut names: Vec<&String> = sites.keys().collect();
        names.sort();
        let mut out = Vec::with_capacity(names.len());
        for name in names {
            let refs = &sites[name];
            let mut msg = format!("undefined symbol: {name}");
            for site in refs.iter().take(self.max_sites) {
                msg.push_str(&format!("\n  referenced by {site}"));
            }
            if refs.len() > self.max_sites {
                msg.push_str(&format!(
                    "\n  ... and {} more references",
                    refs.len() - self.max_sites
                ));
            }
            out.push(msg);
        }
        out
    }
}
