//! GOT/GOTPLT/PLT synthesis: walks every [`crate::symbol::Symbol`] with
//! a `NEEDS_*` bit set and assigns it a slot in the relevant table,
//! recording the slot index back onto the symbol's [`crate::symbol::SymbolAux`].
//!
//! Slot assignment order only needs to be deterministic (for
//! reproducible output), not any particular order — unlike comdat/ICF
//! resolution, there is no race to settle here since it runs after
//! symbol resolution has already reached a fixed point.

use crate::context::Context;
use crate::symbol::{self, SymbolAux};

pub const GOT_ENTRY_SIZE: u64 = 8;
pub const GOTPLT_HEADER_SLOTS: u64 = 3;

#[derive(Default)]
pub struct GotPltLayout {
    pub got_count: u32,
    pub gotplt_count: u32,
    pub plt_count: u32,
}

/// Assign GOT/GOTPLT/PLT slots to every symbol that needs one. Must run
/// after relocation scanning has set each symbol's `NEEDS_*` bits and
/// before layout, since the resulting counts size the chunks.
pub fn assign_slots(ctx: &Context, target: &dyn crate::reloc::Target) -> GotPltLayout {
    let mut layout = GotPltLayout::default();
    let mut aux_table = ctx.symbol_aux.lock().unwrap();

    ctx.symtab.for_each(|_name, sym| {
        if !sym.is_resolved() {
            return;
        }
        let aux_idx = sym.aux_idx.load(std::sync::atomic::Ordering::Relaxed);
        if aux_idx == usize::MAX {
            return;
        }
        let aux: &mut SymbolAux = &mut aux_table[aux_idx];

        if sym.has_needs(symbol::NEEDS_GOT) && aux.got_idx < 0 {
            aux.got_idx = layout.got_count as i32;
            layout.got_count += 1;
        }
        if sym.has_needs(symbol::NEEDS_PLT) && aux.plt_idx < 0 {
            aux.plt_idx = layout.plt_count as i32;
            layout.plt_count += 1;
            aux.pltgot_idx = layout.gotplt_count as i32;
            layout.gotplt_count += 1;
        }
        if sym.has_needs(symbol::NEEDS_GOTTP) && aux.gottp_idx < 0 {
            aux.gottp_idx = layout.got_count as i32;
            layout.got_count += 1;
        }
        if sym.has_needs(symbol::NEEDS_TLSGD) && aux.tlsgd_idx < 0 {
            aux.tlsgd_idx = layout.got_count as i32;
            layout.got_count += 2;
        }
        if sym.has_needs(symbol::NEEDS_TLSDESC) && aux.tlsdesc_idx < 0 {
            aux.tlsdesc_idx = layout.got_count as i32;
            layout.got_count += 2;
        }
    });

    let _ = target.plt_entry_size();
    layout
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::context::LinkerOptions;
    use crate::elf::{Class, Ctx, Endian};
    use clap::Parser;

    fn dummy_ctx() -> Context {
        let cli = Cli::parse_from(["mallard", "-o", "a.out"]);
        let opts = LinkerOptions::from_cli(&cli);
        Context::new(opts, Ctx::new(Class::Elf64, Endian::Little), false)
    }

    #[test]
    fn symbol_needing_plt_gets_both_plt_and_gotplt_slots() {
        let ctx = dummy_ctx();
        let sym = ctx.symtab.intern("foo");
        sym.set_needs(symbol::NEEDS_PLT);
        let aux_idx = ctx.alloc_aux();
        sym.aux_idx.store(aux_idx, std::sync::atomic::Ordering::Relaxed);
        sym.try_resolve(crate::symbol::SymbolSlot {
            file: Some(0),
            rank: crate::symbol::Rank::StrongInObject,
            file_priority: 0,
            ..Default::default()
        });
        let target = crate::reloc::x86_64::X86_64;
        let layout = assign_slots(&ctx, &target);
        assert_eq!(layout.plt_count, 1);
        assert_eq!(layout.gotplt_count, 1);
    }
}
