//! Global symbol resolution: pick one defining file per name, then mark
//! reachability to pull in lazy (archive) members, then re-resolve.

use std::sync::atomic::Ordering;

use crate::context::{Context, FileId};
use crate::symbol::{bind_is_weak, Rank, SymbolSlot, Visibility};

/// One candidate definition offered by a file for a given global name.
pub struct Candidate {
    pub name: String,
    pub file: FileId,
    pub file_priority: u32,
    pub file_is_lazy: bool,
    pub sym_idx: u32,
    pub value: u64,
    pub shndx: u32,
    pub bind: u8,
    pub is_common: bool,
    pub is_undef: bool,
    pub visibility: Visibility,
    pub version_idx: u16,
}

/// Resolve one round of candidates against the context's interning map.
/// Called twice per spec: once for the initial pass, once after
/// reachability marking promotes newly-live archive members.
pub fn resolve_round(ctx: &Context, candidates: &[Candidate]) {
    for c in candidates {
        if c.is_undef {
            continue;
        }
        let sym = ctx.symtab.intern(&c.name);
        let rank = Rank::of(bind_is_weak(c.bind), c.is_common, c.file_is_lazy);
        let slot = SymbolSlot {
            file: Some(c.file),
            sym_idx: c.sym_idx,
            value: c.value,
            shndx: c.shndx,
            visibility: c.visibility,
            version_idx: c.version_idx,
            rank,
            file_priority: c.file_priority,
        };
        sym.try_resolve(slot);
    }
}

/// Reachability marking: for each live file, each non-weak undefined
/// reference forces the defining file's `is_alive` transition. Runs to
/// fixpoint (newly-live files are processed until none remain).
pub fn mark_reachable(ctx: &Context, references: &[(FileId, String, bool)]) {
    let files = ctx.files.read();
    let mut worklist: Vec<FileId> = files
        .iter()
        .filter(|f| f.is_alive.load(Ordering::Acquire))
        .map(|f| f.id)
        .collect();

    loop {
        let mut newly_alive = Vec::new();
        for (referencing_file, name, is_weak) in references {
            if *is_weak {
                continue;
            }
            let referencing_alive = files
                .get(*referencing_file as usize)
                .map(|f| f.is_alive.load(Ordering::Acquire))
                .unwrap_or(false);
            if !referencing_alive {
                continue;
            }
            if let Some(sym) = ctx.symtab.get(name) {
                if let Some(owner) = sym.slot.lock().file {
                    if let Some(owner_file) = files.get(owner as usize) {
                        if !owner_file.is_alive.swap(true, Ordering::AcqRel) {
                            newly_alive.push(owner_file.id);
                        }
                    }
                }
            }
        }
        if newly_alive.is_empty() {
            break;
        }
        worklist.extend(newly_alive);
    }
}

/// `--exclude-libs` promotes all definitions from matching archive
/// members to `STV_HIDDEN`.
pub fn apply_exclude_libs(ctx: &Context, exclude_libs: &[String], archive_name_of: impl Fn(FileId) -> Option<String>) {
    if exclude_libs.is_empty() {
        return;
    }
    let all = exclude_libs.iter().any(|p| p == "ALL");
    ctx.symtab.for_each(|_, sym| {
        let mut slot = sym.slot.lock();
        if let Some(file) = slot.file {
            if let Some(archive) = archive_name_of(file) {
                if all || exclude_libs.iter().any(|p| p == &archive) {
                    slot.visibility = Visibility::Hidden;
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::LinkerOptions;
    use crate::elf::{Class, Ctx, Endian};
    use crate::symbol::Visibility;

    fn dummy_opts() -> LinkerOptions {
        LinkerOptions {
            is_pic: false,
            is_static: false,
            relocatable: false,
            gc_sections: false,
            icf: crate::cli::IcfMode::None,
            hash_style: crate::cli::HashStyle::Both,
            pack_dyn_relocs: crate::cli::PackDynRelocs::None,
            export_dynamic: false,
            bsymbolic: false,
            bsymbolic_functions: false,
            image_base: 0x200000,
            z: crate::cli::ZOptions::default(),
            thread_count: None,
            output: "a.out".into(),
            entry: None,
            soname: None,
            dynamic_linker: None,
            eh_frame_hdr: false,
            build_id: crate::cli::BuildIdKind::None,
            unresolved_symbols: crate::cli::UnresolvedSymbols::ReportAll,
            exclude_libs: Vec::new(),
            relax: false,
        }
    }

    #[test]
    fn strong_beats_weak_regardless_of_order() {
        let ctx = Context::new(dummy_opts(), Ctx::new(Class::Elf64, Endian::Little), false);
        let candidates = vec![
            Candidate {
                name: "foo".into(),
                file: 1,
                file_priority: 1,
                file_is_lazy: false,
                sym_idx: 0,
                value: 0,
                shndx: 1,
                bind: crate::elf::STB_WEAK,
                is_common: false,
                is_undef: false,
                visibility: Visibility::Default,
                version_idx: 0,
            },
            Candidate {
                name: "foo".into(),
                file: 0,
                file_priority: 0,
                file_is_lazy: false,
                sym_idx: 0,
                value: 0,
                shndx: 1,
                bind: crate::elf::STB_GLOBAL,
                is_common: false,
                is_undef: false,
                visibility: Visibility::Default,
                version_idx: 0,
            },
        ];
        resolve_round(&ctx, &candidates);
        let sym = ctx.symtab.get("foo").unwrap();
        assert_eq!(sym.slot.lock().file, Some(0));
    }
}
