//! Relocation type numbers for machine families not covered by
//! [`super::relocation`] (which only carries AArch64/ARM32). Values are
//! the public gABI/psABI assignments for each architecture.
//!
//! Also supplies the two `e_machine` values [`super::header`] omits.

pub const EM_ALPHA: u16 = 0x9026;
pub const EM_LOONGARCH: u16 = 258;

// --- x86-64 ------------------------------------------------------------

pub const R_X86_64_NONE: u32 = 0;
pub const R_X86_64_64: u32 = 1;
pub const R_X86_64_PC32: u32 = 2;
pub const R_X86_64_GOT32: u32 = 3;
pub const R_X86_64_PLT32: u32 = 4;
pub const R_X86_64_COPY: u32 = 5;
pub const R_X86_64_GLOB_DAT: u32 = 6;
pub const R_X86_64_JUMP_SLOT: u32 = 7;
pub const R_X86_64_RELATIVE: u32 = 8;
pub const R_X86_64_GOTPCREL: u32 = 9;
pub const R_X86_64_32: u32 = 10;
pub const R_X86_64_32S: u32 = 11;
pub const R_X86_64_16: u32 = 12;
pub const R_X86_64_PC16: u32 = 13;
pub const R_X86_64_8: u32 = 14;
pub const R_X86_64_PC8: u32 = 15;
pub const R_X86_64_DTPMOD64: u32 = 16;
pub const R_X86_64_DTPOFF64: u32 = 17;
pub const R_X86_64_TPOFF64: u32 = 18;
pub const R_X86_64_TLSGD: u32 = 19;
pub const R_X86_64_TLSLD: u32 = 20;
pub const R_X86_64_DTPOFF32: u32 = 21;
pub const R_X86_64_GOTTPOFF: u32 = 22;
pub const R_X86_64_TPOFF32: u32 = 23;
pub const R_X86_64_PC64: u32 = 24;
pub const R_X86_64_GOTOFF64: u32 = 25;
pub const R_X86_64_GOTPC32: u32 = 26;
pub const R_X86_64_REX_GOTPCRELX: u32 = 42;
pub const R_X86_64_IRELATIVE: u32 = 37;

// --- i386 ----------------------------------------------------------------

pub const R_386_NONE: u32 = 0;
pub const R_386_32: u32 = 1;
pub const R_386_PC32: u32 = 2;
pub const R_386_GOT32: u32 = 3;
pub const R_386_PLT32: u32 = 4;
pub const R_386_COPY: u32 = 5;
pub const R_386_GLOB_DAT: u32 = 6;
pub const R_386_JMP_SLOT: u32 = 7;
pub const R_386_RELATIVE: u32 = 8;
pub const R_386_GOTOFF: u32 = 9;
pub const R_386_GOTPC: u32 = 10;
pub const R_386_TLS_TPOFF: u32 = 14;
pub const R_386_IRELATIVE: u32 = 42;

// --- RISC-V ----------------------------------------------------------------

pub const R_RISCV_NONE: u32 = 0;
pub const R_RISCV_32: u32 = 1;
pub const R_RISCV_64: u32 = 2;
pub const R_RISCV_RELATIVE: u32 = 3;
pub const R_RISCV_COPY: u32 = 4;
pub const R_RISCV_JUMP_SLOT: u32 = 5;
pub const R_RISCV_TLS_DTPMOD64: u32 = 7;
pub const R_RISCV_TLS_DTPREL64: u32 = 9;
pub const R_RISCV_TLS_TPREL64: u32 = 11;
pub const R_RISCV_TLSDESC: u32 = 12;
pub const R_RISCV_BRANCH: u32 = 16;
pub const R_RISCV_JAL: u32 = 17;
pub const R_RISCV_CALL: u32 = 18;
pub const R_RISCV_CALL_PLT: u32 = 19;
pub const R_RISCV_GOT_HI20: u32 = 20;
pub const R_RISCV_TLS_GOT_HI20: u32 = 21;
pub const R_RISCV_TLS_GD_HI20: u32 = 22;
pub const R_RISCV_PCREL_HI20: u32 = 23;
pub const R_RISCV_PCREL_LO12_I: u32 = 24;
pub const R_RISCV_PCREL_LO12_S: u32 = 25;
pub const R_RISCV_HI20: u32 = 26;
pub const R_RISCV_LO12_I: u32 = 27;
pub const R_RISCV_LO12_S: u32 = 28;
pub const R_RISCV_TPREL_HI20: u32 = 29;
pub const R_RISCV_TPREL_LO12_I: u32 = 30;
pub const R_RISCV_TPREL_LO12_S: u32 = 31;
pub const R_RISCV_TPREL_ADD: u32 = 32;
pub const R_RISCV_ALIGN: u32 = 43;
pub const R_RISCV_RVC_BRANCH: u32 = 44;
pub const R_RISCV_RVC_JUMP: u32 = 45;
pub const R_RISCV_RELAX: u32 = 51;
pub const R_RISCV_IRELATIVE: u32 = 58;

// --- LoongArch -------------------------------------------------------------

pub const R_LARCH_NONE: u32 = 0;
pub const R_LARCH_32: u32 = 1;
pub const R_LARCH_64: u32 = 2;
pub const R_LARCH_RELATIVE: u32 = 3;
pub const R_LARCH_COPY: u32 = 4;
pub const R_LARCH_JUMP_SLOT: u32 = 5;
pub const R_LARCH_TLS_DTPMOD64: u32 = 7;
pub const R_LARCH_TLS_DTPREL64: u32 = 9;
pub const R_LARCH_TLS_TPREL64: u32 = 11;
pub const R_LARCH_TLS_DESC64: u32 = 12;
pub const R_LARCH_PCALA_HI20: u32 = 71;
pub const R_LARCH_PCALA_LO12: u32 = 72;
pub const R_LARCH_TLS_LE_HI20: u32 = 100;
pub const R_LARCH_TLS_LE_LO12: u32 = 101;
pub const R_LARCH_ALIGN: u32 = 102;
pub const R_LARCH_RELAX: u32 = 99;

// --- PowerPC 32 --------------------------------------------------------

pub const R_PPC_NONE: u32 = 0;
pub const R_PPC_ADDR32: u32 = 1;
pub const R_PPC_ADDR16_HA: u32 = 6;
pub const R_PPC_ADDR16_LO: u32 = 4;
pub const R_PPC_REL24: u32 = 10;
pub const R_PPC_JMP_SLOT: u32 = 21;
pub const R_PPC_RELATIVE: u32 = 22;
pub const R_PPC_COPY: u32 = 19;

// --- PowerPC 64 --------------------------------------------------------

pub const R_PPC64_NONE: u32 = 0;
pub const R_PPC64_ADDR64: u32 = 38;
pub const R_PPC64_REL24: u32 = 10;
pub const R_PPC64_JMP_SLOT: u32 = 21;
pub const R_PPC64_RELATIVE: u32 = 22;
pub const R_PPC64_COPY: u32 = 19;
pub const R_PPC64_ADDR16_HA: u32 = 6;
pub const R_PPC64_ADDR16_LO: u32 = 4;
pub const R_PPC64_REL16_HA: u32 = 252;
pub const R_PPC64_REL16_LO: u32 = 250;

// --- s390 / s390x --------------------------------------------------------

pub const R_390_NONE: u32 = 0;
pub const R_390_32: u32 = 4;
pub const R_390_PC32: u32 = 5;
pub const R_390_COPY: u32 = 9;
pub const R_390_GLOB_DAT: u32 = 10;
pub const R_390_JMP_SLOT: u32 = 11;
pub const R_390_RELATIVE: u32 = 12;

pub const R_390_64: u32 = 22;
pub const R_390_PC64: u32 = 23;

// --- SPARC64 -------------------------------------------------------------

pub const R_SPARC_NONE: u32 = 0;
pub const R_SPARC_64: u32 = 32;
pub const R_SPARC_COPY: u32 = 19;
pub const R_SPARC_GLOB_DAT: u32 = 20;
pub const R_SPARC_JMP_SLOT: u32 = 21;
pub const R_SPARC_RELATIVE: u32 = 22;
pub const R_SPARC_WDISC30: u32 = 7;

// --- PA-RISC (HPPA) ------------------------------------------------------

pub const R_PARISC_NONE: u32 = 0;
pub const R_PARISC_DIR32: u32 = 1;
pub const R_PARISC_PLABEL32: u32 = 9;
pub const R_PARISC_IPLT: u32 = 15;
pub const R_PARISC_COPY: u32 = 10;

// --- MIPS64 ----------------------------------------------------------------

pub const R_MIPS_NONE: u32 = 0;
pub const R_MIPS_32: u32 = 2;
pub const R_MIPS_64: u32 = 18;
pub const R_MIPS_REL32: u32 = 3;
pub const R_MIPS_JUMP_SLOT: u32 = 127;
pub const R_MIPS_COPY: u32 = 126;

// --- SuperH (SH4) ------------------------------------------------------

pub const R_SH_NONE: u32 = 0;
pub const R_SH_DIR32: u32 = 1;
pub const R_SH_REL32: u32 = 3;
pub const R_SH_GLOB_DAT: u32 = 163;
pub const R_SH_JMP_SLOT: u32 = 164;
pub const R_SH_RELATIVE: u32 = 165;
pub const R_SH_COPY: u32 = 162;

// --- m68k ------------------------------------------------------------------

pub const R_68K_NONE: u32 = 0;
pub const R_68K_32: u32 = 1;
pub const R_68K_PC32: u32 = 4;
pub const R_68K_GLOB_DAT: u32 = 20;
pub const R_68K_JMP_SLOT: u32 = 21;
pub const R_68K_RELATIVE: u32 = 22;
pub const R_68K_COPY: u32 = 19;

// --- Alpha -----------------------------------------------------------------

pub const R_ALPHA_NONE: u32 = 0;
pub const R_ALPHA_REFLONG: u32 = 1;
pub const R_ALPHA_REFQUAD: u32 = 2;
pub const R_ALPHA_GLOB_DAT: u32 = 25;
pub const R_ALPHA_JMP_SLOT: u32 = 26;
pub const R_ALPHA_RELATIVE: u32 = 27;
pub const R_ALPHA_COPY: u32 = 24;
