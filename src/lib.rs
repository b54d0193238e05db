//! Core of a parallel ELF linker: symbol resolution, comdat and
//! section-piece dedup, garbage collection, identical-code folding,
//! relocation scanning/application, GOT/PLT/dynamic-table synthesis,
//! layout, and range-extension thunks/relaxation.
//!
//! This crate is the linking *core*; command-line parsing lives in
//! [`cli`] and the end-to-end driver in `main.rs`, but linker-script
//! evaluation, response-file expansion, and mapfile printing are
//! deliberately out of scope (see `DESIGN.md`).

pub mod archive;
pub mod buildid;
pub mod chunk;
pub mod cli;
pub mod comdat;
pub mod context;
pub mod dynsec;
pub mod eh_frame;
pub mod elf;
pub mod error;
pub mod gc;
pub mod glob;
pub mod got_plt;
pub mod hyperloglog;
pub mod icf;
pub mod layout;
pub mod mergeable;
pub mod object;
pub mod output;
pub mod reloc;
pub mod relr;
pub mod resolve;
pub mod shrink;
pub mod strtab;
pub mod symbol;
pub mod thunks;
pub mod version_script;

pub use error::{LinkError, Result};
