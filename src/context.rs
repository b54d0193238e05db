//! Process-wide linker state: files, chunks, symbol/comdat maps, and the
//! aux-symbol side table threaded through every pipeline stage.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

use parking_lot::RwLock;

use crate::cli::Cli;
use crate::comdat::ComdatTable;
use crate::elf::Ctx;
use crate::error::{Diagnostics, UndefRegistry};
use crate::symbol::{SymbolAux, SymbolTable};

pub type FileId = u32;
pub type SectionId = u32;

/// One content section of an input object file.
pub struct InputSection {
    pub file: FileId,
    pub shndx: u32,
    pub name: String,
    pub content: Vec<u8>,
    pub sh_type: u32,
    pub sh_flags: u64,
    pub p2align: u8,
    pub output_section: Option<u32>,
    pub output_offset: AtomicU32,
    pub is_alive: AtomicBool,
    pub is_visited: AtomicBool,
    /// ICF: index of the leader this section folded onto (self if none).
    pub icf_leader: AtomicU32,
    pub icf_eligible: bool,
    pub relocs: Vec<crate::elf::Rela>,
    pub fde_begin: u32,
    pub fde_end: u32,
}

impl InputSection {
    pub fn new(file: FileId, shndx: u32, name: String, content: Vec<u8>, sh_type: u32, sh_flags: u64) -> Self {
        InputSection {
            file,
            shndx,
            name,
            content,
            sh_type,
            sh_flags,
            p2align: 0,
            output_section: None,
            output_offset: AtomicU32::new(0),
            is_alive: AtomicBool::new(true),
            is_visited: AtomicBool::new(false),
            icf_leader: AtomicU32::new(u32::MAX),
            icf_eligible: false,
            relocs: Vec::new(),
            fde_begin: 0,
            fde_end: 0,
        }
    }

    pub fn is_mergeable(&self) -> bool {
        self.sh_flags & crate::elf::SHF_MERGE as u64 != 0
    }

    pub fn kill(&self) {
        self.is_alive.store(false, Ordering::Release);
    }

    pub fn alive(&self) -> bool {
        self.is_alive.load(Ordering::Acquire)
    }
}

/// A single fragment of a mergeable (`SHF_MERGE`) section, interned by
/// content into a process-wide [`crate::mergeable::MergedSection`].
pub struct SectionFragment {
    pub offset: AtomicU32,
    pub p2align: std::sync::atomic::AtomicU8,
    pub is_alive: AtomicBool,
}

impl Default for SectionFragment {
    fn default() -> Self {
        SectionFragment {
            offset: AtomicU32::new(0),
            p2align: std::sync::atomic::AtomicU8::new(0),
            is_alive: AtomicBool::new(false),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Object,
    Shared,
    Internal,
}

/// A single linker input (or the synthesized internal pseudo-file).
pub struct File {
    pub id: FileId,
    pub kind: FileKind,
    pub name: String,
    pub priority: u32,
    pub is_alive: AtomicBool,
    pub is_lazy: AtomicBool,
    pub ctx: Ctx,
    pub sections: Vec<InputSection>,
    pub local_symbols: Vec<crate::elf::Sym>,
    pub global_symbol_names: Vec<String>,
    pub strtab: crate::strtab::Strtab<'static>,
    pub soname: Option<String>,
    pub num_dynrel: std::cell::Cell<u32>,
    pub needs_executable_stack: bool,
}

impl File {
    pub fn is_dso(&self) -> bool {
        self.kind == FileKind::Shared
    }
}

/// Output-level options resolved once from [`Cli`], consumed by every
/// later stage instead of threading `Cli` itself through the pipeline.
pub struct LinkerOptions {
    pub is_pic: bool,
    pub is_static: bool,
    pub relocatable: bool,
    pub gc_sections: bool,
    pub icf: crate::cli::IcfMode,
    pub hash_style: crate::cli::HashStyle,
    pub pack_dyn_relocs: crate::cli::PackDynRelocs,
    pub export_dynamic: bool,
    pub bsymbolic: bool,
    pub bsymbolic_functions: bool,
    pub image_base: u64,
    pub z: crate::cli::ZOptions,
    pub thread_count: Option<usize>,
    pub output: std::path::PathBuf,
    pub entry: Option<String>,
    pub soname: Option<String>,
    pub dynamic_linker: Option<String>,
    pub eh_frame_hdr: bool,
    pub build_id: crate::cli::BuildIdKind,
    pub unresolved_symbols: crate::cli::UnresolvedSymbols,
    pub exclude_libs: Vec<String>,
    pub relax: bool,
}

impl LinkerOptions {
    pub fn from_cli(cli: &Cli) -> Self {
        LinkerOptions {
            is_pic: cli.is_pic(),
            is_static: cli.is_static(),
            relocatable: cli.relocatable,
            gc_sections: cli.gc_sections,
            icf: cli.icf,
            hash_style: cli.hash_style,
            pack_dyn_relocs: cli.pack_dyn_relocs,
            export_dynamic: cli.export_dynamic,
            bsymbolic: cli.bsymbolic,
            bsymbolic_functions: cli.bsymbolic_functions,
            image_base: cli.image_base_value(),
            z: crate::cli::ZOptions::parse(&cli.z_flags),
            thread_count: cli.thread_count,
            output: cli.output.clone(),
            entry: cli.entry.clone(),
            soname: cli.soname.clone(),
            dynamic_linker: cli.dynamic_linker.clone(),
            eh_frame_hdr: cli.eh_frame_hdr,
            build_id: cli.build_id_kind(),
            unresolved_symbols: cli.unresolved_symbols,
            exclude_libs: cli.exclude_libs.clone(),
            relax: cli.relax && !cli.no_relax,
        }
    }
}

/// Process-wide state threaded through every pipeline stage.
pub struct Context {
    pub opts: LinkerOptions,
    pub files: RwLock<Vec<File>>,
    pub symtab: SymbolTable,
    pub symbol_aux: Mutex<Vec<SymbolAux>>,
    pub comdats: ComdatTable,
    pub diagnostics: Diagnostics,
    pub undef: UndefRegistry,
    pub ctx: Ctx,
}

impl Context {
    pub fn new(opts: LinkerOptions, ctx: Ctx, fatal_warnings: bool) -> Self {
        Context {
            opts,
            files: RwLock::new(Vec::new()),
            symtab: SymbolTable::new(),
            symbol_aux: Mutex::new(Vec::new()),
            comdats: ComdatTable::new(),
            diagnostics: Diagnostics::new(fatal_warnings),
            undef: UndefRegistry::new(3),
            ctx,
        }
    }

    /// Allocate a fresh `SymbolAux` slot and return its index.
    pub fn alloc_aux(&self) -> usize {
        let mut aux = self.symbol_aux.lock().unwrap();
        aux.push(SymbolAux::new());
        aux.len() - 1
    }
}
