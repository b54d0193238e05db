//! Global symbol interning, resolution ranks, and per-symbol side state.

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::elf::{STB_GLOBAL, STB_GNU_UNIQUE, STB_LOCAL, STB_WEAK};

pub const NEEDS_GOT: u8 = 1 << 0;
pub const NEEDS_PLT: u8 = 1 << 1;
pub const NEEDS_GOTTP: u8 = 1 << 2;
pub const NEEDS_TLSGD: u8 = 1 << 3;
pub const NEEDS_TLSLD: u8 = 1 << 4;
pub const NEEDS_TLSDESC: u8 = 1 << 5;
pub const NEEDS_COPYREL: u8 = 1 << 6;
pub const NEEDS_DYNSYM: u8 = 1 << 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Visibility {
    Hidden,
    Protected,
    Default,
}

impl Visibility {
    /// Merge two visibilities, min-precedence DEFAULT > PROTECTED > HIDDEN.
    pub fn merge(self, other: Visibility) -> Visibility {
        self.min(other)
    }

    pub fn from_st_other(st_other: u8) -> Visibility {
        match st_other & 0x3 {
            2 => Visibility::Hidden,
            1 => Visibility::Hidden, // STV_INTERNAL folds into hidden
            3 => Visibility::Protected,
            _ => Visibility::Default,
        }
    }
}

/// The resolution rank a candidate definition would contribute if chosen
/// as a symbol's owner. Lower wins; ties break on `file.priority`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    StrongInObject = 1,
    WeakInObject = 2,
    StrongInLazy = 3,
    WeakInLazy = 4,
    CommonInObject = 5,
    CommonInLazy = 6,
    Unresolved = 7,
}

impl Rank {
    pub fn of(bind_is_weak: bool, is_common: bool, file_is_lazy: bool) -> Rank {
        match (is_common, file_is_lazy, bind_is_weak) {
            (true, false, _) => Rank::CommonInObject,
            (true, true, _) => Rank::CommonInLazy,
            (false, false, false) => Rank::StrongInObject,
            (false, false, true) => Rank::WeakInObject,
            (false, true, false) => Rank::StrongInLazy,
            (false, true, true) => Rank::WeakInLazy,
        }
    }
}

/// Per-symbol GOT/PLT/TLS side-table indices, `-1` when absent. Kept out
/// of `Symbol` itself so the hot struct stays small; indexed by
/// `Symbol::aux_idx` into a single `Vec<SymbolAux>` on `Context`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolAux {
    pub got_idx: i32,
    pub gotplt_idx: i32,
    pub gottp_idx: i32,
    pub tlsgd_idx: i32,
    pub tlsdesc_idx: i32,
    pub plt_idx: i32,
    pub pltgot_idx: i32,
    pub dynsym_idx: i32,
}

impl SymbolAux {
    pub fn new() -> Self {
        SymbolAux {
            got_idx: -1,
            gotplt_idx: -1,
            gottp_idx: -1,
            tlsgd_idx: -1,
            tlsdesc_idx: -1,
            plt_idx: -1,
            pltgot_idx: -1,
            dynsym_idx: -1,
        }
    }
}

pub type FileId = u32;
pub type SymbolId = u32;

/// Mutable fields touched during resolution, guarded by a per-symbol
/// lock (resolution critical sections are a handful of field writes,
/// so a lightweight spinlock-style mutex is used rather than a
/// heavier synchronization primitive).
#[derive(Debug, Clone)]
pub struct SymbolSlot {
    pub file: Option<FileId>,
    pub sym_idx: u32,
    pub value: u64,
    pub shndx: u32,
    pub visibility: Visibility,
    pub version_idx: u16,
    pub rank: Rank,
    pub file_priority: u32,
}

impl Default for SymbolSlot {
    fn default() -> Self {
        SymbolSlot {
            file: None,
            sym_idx: 0,
            value: 0,
            shndx: 0,
            visibility: Visibility::Default,
            version_idx: 0,
            rank: Rank::Unresolved,
            file_priority: u32::MAX,
        }
    }
}

bitflags::bitflags! {
    #[derive(Default)]
    pub struct SymFlags: u16 {
        const IS_WEAK          = 1 << 0;
        const IS_IMPORTED      = 1 << 1;
        const IS_EXPORTED      = 1 << 2;
        const HAS_COPYREL      = 1 << 3;
        const COPYREL_READONLY = 1 << 4;
        const WRITE_TO_SYMTAB  = 1 << 5;
        const TRACED           = 1 << 6;
        const WRAP             = 1 << 7;
        const IS_LAZY          = 1 << 8;
    }
}

/// A global symbol, interned once per name across the whole link.
pub struct Symbol {
    pub name: Box<str>,
    pub slot: Mutex<SymbolSlot>,
    pub needs: AtomicU8,
    pub flags: Mutex<SymFlags>,
    pub aux_idx: AtomicUsize,
}

impl Symbol {
    pub fn new(name: &str) -> Symbol {
        Symbol {
            name: name.into(),
            slot: Mutex::new(SymbolSlot::default()),
            needs: AtomicU8::new(0),
            flags: Mutex::new(SymFlags::default()),
            aux_idx: AtomicUsize::new(usize::MAX),
        }
    }

    /// Sets a NEEDS_* bit and returns whether this call made the 0→1
    /// transition (used to dedupe GOT/PLT slot allocation: only the
    /// thread that flips the bit enqueues the symbol for allocation).
    pub fn set_needs(&self, bit: u8) -> bool {
        let prev = self.needs.fetch_or(bit, Ordering::AcqRel);
        prev & bit == 0
    }

    pub fn has_needs(&self, bit: u8) -> bool {
        self.needs.load(Ordering::Acquire) & bit != 0
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.lock().file.is_some()
    }

    /// Attempt to install `candidate` as this symbol's owner if its rank
    /// (and, on ties, file priority) beats the current owner. Returns
    /// true if the candidate won.
    pub fn try_resolve(&self, candidate: SymbolSlot) -> bool {
        let mut slot = self.slot.lock();
        let better = candidate.rank < slot.rank
            || (candidate.rank == slot.rank && candidate.file_priority < slot.file_priority);
        if better {
            let merged_vis = candidate.visibility.merge(slot.visibility);
            *slot = candidate;
            slot.visibility = merged_vis;
            true
        } else {
            false
        }
    }
}

/// Concurrent, lock-free-on-insert interning map from symbol name to
/// [`Symbol`]. Every global symbol encountered across every input file
/// passes through here exactly once.
#[derive(Default)]
pub struct SymbolTable {
    map: DashMap<Box<str>, std::sync::Arc<Symbol>>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable { map: DashMap::new() }
    }

    pub fn intern(&self, name: &str) -> std::sync::Arc<Symbol> {
        if let Some(sym) = self.map.get(name) {
            return sym.clone();
        }
        let sym = std::sync::Arc::new(Symbol::new(name));
        self.map
            .entry(name.into())
            .or_insert_with(|| sym.clone())
            .clone()
    }

    pub fn get(&self, name: &str) -> Option<std::sync::Arc<Symbol>> {
        self.map.get(name).map(|e| e.clone())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn for_each(&self, mut f: impl FnMut(&str, &Symbol)) {
        for entry in self.map.iter() {
            f(entry.key(), entry.value());
        }
    }
}

/// `STB_GNU_UNIQUE` aliases to `STB_WEAK` for resolution purposes.
pub fn normalized_bind(bind: u8) -> u8 {
    if bind == STB_GNU_UNIQUE {
        STB_WEAK
    } else {
        bind
    }
}

pub fn bind_is_weak(bind: u8) -> bool {
    normalized_bind(bind) == STB_WEAK
}

pub fn bind_is_global(bind: u8) -> bool {
    normalized_bind(bind) == STB_GLOBAL
}

pub fn bind_is_local(bind: u8) -> bool {
    bind == STB_LOCAL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_returns_same_instance() {
        let table = SymbolTable::new();
        let a = table.intern("printf");
        let b = table.intern("printf");
        assert!(std::sync::Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn stronger_rank_wins_resolution() {
        let sym = Symbol::new("foo");
        let weak = SymbolSlot {
            rank: Rank::WeakInObject,
            file_priority: 0,
            ..SymbolSlot::default()
        };
        assert!(sym.try_resolve(weak));
        let strong = SymbolSlot {
            rank: Rank::StrongInObject,
            file_priority: 5,
            ..SymbolSlot::default()
        };
        assert!(sym.try_resolve(strong));
        assert_eq!(sym.slot.lock().rank, Rank::StrongInObject);
    }

    #[test]
    fn tie_breaks_on_file_priority() {
        let sym = Symbol::new("bar");
        let first = SymbolSlot {
            rank: Rank::StrongInObject,
            file_priority: 10,
            ..SymbolSlot::default()
        };
        assert!(sym.try_resolve(first));
        let later_same_rank_worse_priority = SymbolSlot {
            rank: Rank::StrongInObject,
            file_priority: 20,
            ..SymbolSlot::default()
        };
        assert!(!sym.try_resolve(later_same_rank_worse_priority));
        let better_priority = SymbolSlot {
            rank: Rank::StrongInObject,
            file_priority: 1,
            ..SymbolSlot::default()
        };
        assert!(sym.try_resolve(better_priority));
    }

    #[test]
    fn gnu_unique_aliases_to_weak() {
        assert!(bind_is_weak(STB_GNU_UNIQUE));
    }
}
