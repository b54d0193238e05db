//! ELF container types shared across 32/64-bit, little/big-endian inputs.
//!
//! Rather than a macro-generated `elf32::Sym`/`elf64::Sym` pair, every
//! record here is a single struct carrying its widest representation
//! (`u64`/`i64`), read and written through a [`Ctx`] that records the
//! input's actual class and endianness. A linker core that has to
//! support seventeen processor families benefits more from one
//! generalized shape than from duplicating each record per bit width.

pub mod constants;

use crate::error::{LinkError, Result};
use scroll::{ctx, Endian as ScrollEndian, Pread, Pwrite};

pub use constants::*;

/// Byte order of an ELF input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endian {
    Little,
    Big,
}

impl From<Endian> for ScrollEndian {
    fn from(e: Endian) -> ScrollEndian {
        match e {
            Endian::Little => ScrollEndian::Little,
            Endian::Big => ScrollEndian::Big,
        }
    }
}

/// Address width of an ELF input or output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Elf32,
    Elf64,
}

/// The (class, endianness) pair every ELF record is read and written
/// against. Carried by value everywhere a record is parsed or emitted,
/// threaded through `TryFromCtx`/`TryIntoCtx` impls the same way
/// `scroll`'s context parameter normally is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ctx {
    pub class: Class,
    pub endian: Endian,
}

impl Ctx {
    pub fn new(class: Class, endian: Endian) -> Self {
        Ctx { class, endian }
    }

    pub fn is_64(&self) -> bool {
        matches!(self.class, Class::Elf64)
    }

    pub fn scroll_endian(&self) -> ScrollEndian {
        self.endian.into()
    }

    /// Peek the class/endianness out of the first 16 bytes of an ELF
    /// image (`e_ident`).
    pub fn peek(bytes: &[u8]) -> Result<Ctx> {
        if bytes.len() < SIZEOF_IDENT {
            return Err(LinkError::Malformed("input shorter than e_ident".into()));
        }
        if &bytes[0..4] != ELFMAG {
            return Err(LinkError::BadMagic(u32::from_be_bytes([
                bytes[0], bytes[1], bytes[2], bytes[3],
            ]) as u64));
        }
        let class = match bytes[EI_CLASS] {
            ELFCLASS32 => Class::Elf32,
            ELFCLASS64 => Class::Elf64,
            other => return Err(LinkError::Malformed(format!("unknown EI_CLASS {other}"))),
        };
        let endian = match bytes[EI_DATA] {
            ELFDATA2LSB => Endian::Little,
            ELFDATA2MSB => Endian::Big,
            other => return Err(LinkError::Malformed(format!("unknown EI_DATA {other}"))),
        };
        Ok(Ctx::new(class, endian))
    }
}

/// ELF file header, widened to `u64` regardless of the input's actual
/// class. `e_ident` is kept verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct Header {
    pub e_ident: [u8; SIZEOF_IDENT],
    pub e_type: u16,
    pub e_machine: u16,
    pub e_version: u32,
    pub e_entry: u64,
    pub e_phoff: u64,
    pub e_shoff: u64,
    pub e_flags: u32,
    pub e_ehsize: u16,
    pub e_phentsize: u16,
    pub e_phnum: u16,
    pub e_shentsize: u16,
    pub e_shnum: u16,
    pub e_shstrndx: u16,
}

impl Header {
    pub fn size(ctx: Ctx) -> usize {
        if ctx.is_64() {
            64
        } else {
            52
        }
    }

    pub fn parse(bytes: &[u8], ctx: Ctx) -> Result<Header> {
        let endian = ctx.scroll_endian();
        let mut off = 0usize;
        let mut e_ident = [0u8; SIZEOF_IDENT];
        e_ident.copy_from_slice(&bytes[0..SIZEOF_IDENT]);
        off += SIZEOF_IDENT;
        let e_type: u16 = bytes.gread_with(&mut off, endian)?;
        let e_machine: u16 = bytes.gread_with(&mut off, endian)?;
        let e_version: u32 = bytes.gread_with(&mut off, endian)?;
        let (e_entry, e_phoff, e_shoff);
        if ctx.is_64() {
            e_entry = bytes.gread_with::<u64>(&mut off, endian)?;
            e_phoff = bytes.gread_with::<u64>(&mut off, endian)?;
            e_shoff = bytes.gread_with::<u64>(&mut off, endian)?;
        } else {
            e_entry = bytes.gread_with::<u32>(&mut off, endian)? as u64;
            e_phoff = bytes.gread_with::<u32>(&mut off, endian)? as u64;
            e_shoff = bytes.gread_with::<u32>(&mut off, endian)? as u64;
        }
        let e_flags: u32 = bytes.gread_with(&mut off, endian)?;
        let e_ehsize: u16 = bytes.gread_with(&mut off, endian)?;
        let e_phentsize: u16 = bytes.gread_with(&mut off, endian)?;
        let e_phnum: u16 = bytes.gread_with(&mut off, endian)?;
        let e_shentsize: u16 = bytes.gread_with(&mut off, endian)?;
        let e_shnum: u16 = bytes.gread_with(&mut off, endian)?;
        let e_shstrndx: u16 = bytes.gread_with(&mut off, endian)?;
        Ok(Header {
            e_ident,
            e_type,
            e_machine,
            e_version,
            e_entry,
            e_phoff,
            e_shoff,
            e_flags,
            e_ehsize,
            e_phentsize,
            e_phnum,
            e_shentsize,
            e_shnum,
            e_shstrndx,
        })
    }

    pub fn write(&self, ctx: Ctx, out: &mut Vec<u8>) -> Result<()> {
        let endian = ctx.scroll_endian();
        out.extend_from_slice(&self.e_ident);
        let mut buf = [0u8; 2];
        buf.pwrite_with(self.e_type, 0, endian)?;
        out.extend_from_slice(&buf);
        buf.pwrite_with(self.e_machine, 0, endian)?;
        out.extend_from_slice(&buf);
        let mut buf4 = [0u8; 4];
        buf4.pwrite_with(self.e_version, 0, endian)?;
        out.extend_from_slice(&buf4);
        if ctx.is_64() {
            let mut buf8 = [0u8; 8];
            for v in [self.e_entry, self.e_phoff, self.e_shoff] {
                buf8.pwrite_with(v, 0, endian)?;
                out.extend_from_slice(&buf8);
            }
        } else {
            for v in [self.e_entry, self.e_phoff, self.e_shoff] {
                buf4.pwrite_with(v as u32, 0, endian)?;
                out.extend_from_slice(&buf4);
            }
        }
        buf4.pwrite_with(self.e_flags, 0, endian)?;
        out.extend_from_slice(&buf4);
        for v in [
            self.e_ehsize,
            self.e_phentsize,
            self.e_phnum,
            self.e_shentsize,
            self.e_shnum,
            self.e_shstrndx,
        ] {
            buf.pwrite_with(v, 0, endian)?;
            out.extend_from_slice(&buf);
        }
        Ok(())
    }
}

macro_rules! widened_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident { $(pub $field:ident : $ty:ty),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name { $(pub $field: $ty),* }
    };
}

widened_record! {
    /// Section header, widened like [`Header`].
    pub struct SectionHeader {
        pub sh_name: u32,
        pub sh_type: u32,
        pub sh_flags: u64,
        pub sh_addr: u64,
        pub sh_offset: u64,
        pub sh_size: u64,
        pub sh_link: u32,
        pub sh_info: u32,
        pub sh_addralign: u64,
        pub sh_entsize: u64,
    }
}

impl SectionHeader {
    pub fn size(ctx: Ctx) -> usize {
        if ctx.is_64() {
            64
        } else {
            40
        }
    }

    pub fn parse(bytes: &[u8], off: &mut usize, ctx: Ctx) -> Result<SectionHeader> {
        let e = ctx.scroll_endian();
        let sh_name = bytes.gread_with(off, e)?;
        let sh_type = bytes.gread_with(off, e)?;
        if ctx.is_64() {
            Ok(SectionHeader {
                sh_name,
                sh_type,
                sh_flags: bytes.gread_with(off, e)?,
                sh_addr: bytes.gread_with(off, e)?,
                sh_offset: bytes.gread_with(off, e)?,
                sh_size: bytes.gread_with(off, e)?,
                sh_link: bytes.gread_with(off, e)?,
                sh_info: bytes.gread_with(off, e)?,
                sh_addralign: bytes.gread_with(off, e)?,
                sh_entsize: bytes.gread_with(off, e)?,
            })
        } else {
            Ok(SectionHeader {
                sh_name,
                sh_type,
                sh_flags: bytes.gread_with::<u32>(off, e)? as u64,
                sh_addr: bytes.gread_with::<u32>(off, e)? as u64,
                sh_offset: bytes.gread_with::<u32>(off, e)? as u64,
                sh_size: bytes.gread_with::<u32>(off, e)? as u64,
                sh_link: bytes.gread_with(off, e)?,
                sh_info: bytes.gread_with(off, e)?,
                sh_addralign: bytes.gread_with::<u32>(off, e)? as u64,
                sh_entsize: bytes.gread_with::<u32>(off, e)? as u64,
            })
        }
    }

    pub fn write(&self, ctx: Ctx, out: &mut Vec<u8>) -> Result<()> {
        let e = ctx.scroll_endian();
        write_u32(out, self.sh_name, e)?;
        write_u32(out, self.sh_type, e)?;
        if ctx.is_64() {
            write_u64(out, self.sh_flags, e)?;
            write_u64(out, self.sh_addr, e)?;
            write_u64(out, self.sh_offset, e)?;
            write_u64(out, self.sh_size, e)?;
            write_u32(out, self.sh_link, e)?;
            write_u32(out, self.sh_info, e)?;
            write_u64(out, self.sh_addralign, e)?;
            write_u64(out, self.sh_entsize, e)?;
        } else {
            write_u32(out, self.sh_flags as u32, e)?;
            write_u32(out, self.sh_addr as u32, e)?;
            write_u32(out, self.sh_offset as u32, e)?;
            write_u32(out, self.sh_size as u32, e)?;
            write_u32(out, self.sh_link, e)?;
            write_u32(out, self.sh_info, e)?;
            write_u32(out, self.sh_addralign as u32, e)?;
            write_u32(out, self.sh_entsize as u32, e)?;
        }
        Ok(())
    }

    pub fn is_alloc(&self) -> bool {
        self.sh_flags & SHF_ALLOC as u64 != 0
    }

    pub fn is_writable(&self) -> bool {
        self.sh_flags & SHF_WRITE as u64 != 0
    }

    pub fn is_executable(&self) -> bool {
        self.sh_flags & SHF_EXECINSTR as u64 != 0
    }

    pub fn is_tls(&self) -> bool {
        self.sh_flags & SHF_TLS as u64 != 0
    }
}

widened_record! {
    /// Program header, widened like [`Header`].
    pub struct ProgramHeader {
        pub p_type: u32,
        pub p_flags: u32,
        pub p_offset: u64,
        pub p_vaddr: u64,
        pub p_paddr: u64,
        pub p_filesz: u64,
        pub p_memsz: u64,
        pub p_align: u64,
    }
}

impl ProgramHeader {
    pub fn size(ctx: Ctx) -> usize {
        if ctx.is_64() {
            56
        } else {
            32
        }
    }

    pub fn write(&self, ctx: Ctx, out: &mut Vec<u8>) -> Result<()> {
        let e = ctx.scroll_endian();
        if ctx.is_64() {
            write_u32(out, self.p_type, e)?;
            write_u32(out, self.p_flags, e)?;
            write_u64(out, self.p_offset, e)?;
            write_u64(out, self.p_vaddr, e)?;
            write_u64(out, self.p_paddr, e)?;
            write_u64(out, self.p_filesz, e)?;
            write_u64(out, self.p_memsz, e)?;
            write_u64(out, self.p_align, e)?;
        } else {
            write_u32(out, self.p_type, e)?;
            write_u32(out, self.p_offset as u32, e)?;
            write_u32(out, self.p_vaddr as u32, e)?;
            write_u32(out, self.p_paddr as u32, e)?;
            write_u32(out, self.p_filesz as u32, e)?;
            write_u32(out, self.p_memsz as u32, e)?;
            write_u32(out, self.p_flags, e)?;
            write_u32(out, self.p_align as u32, e)?;
        }
        Ok(())
    }
}

widened_record! {
    /// Symbol table entry, widened like [`Header`].
    pub struct Sym {
        pub st_name: u32,
        pub st_info: u8,
        pub st_other: u8,
        pub st_shndx: u16,
        pub st_value: u64,
        pub st_size: u64,
    }
}

impl Sym {
    pub fn size(ctx: Ctx) -> usize {
        if ctx.is_64() {
            24
        } else {
            16
        }
    }

    pub fn parse(bytes: &[u8], off: &mut usize, ctx: Ctx) -> Result<Sym> {
        let e = ctx.scroll_endian();
        if ctx.is_64() {
            let st_name = bytes.gread_with(off, e)?;
            let st_info = bytes.gread_with(off, e)?;
            let st_other = bytes.gread_with(off, e)?;
            let st_shndx = bytes.gread_with(off, e)?;
            let st_value = bytes.gread_with(off, e)?;
            let st_size = bytes.gread_with(off, e)?;
            Ok(Sym { st_name, st_info, st_other, st_shndx, st_value, st_size })
        } else {
            let st_name = bytes.gread_with(off, e)?;
            let st_value = bytes.gread_with::<u32>(off, e)? as u64;
            let st_size = bytes.gread_with::<u32>(off, e)? as u64;
            let st_info = bytes.gread_with(off, e)?;
            let st_other = bytes.gread_with(off, e)?;
            let st_shndx = bytes.gread_with(off, e)?;
            Ok(Sym { st_name, st_info, st_other, st_shndx, st_value, st_size })
        }
    }

    pub fn write(&self, ctx: Ctx, out: &mut Vec<u8>) -> Result<()> {
        let e = ctx.scroll_endian();
        if ctx.is_64() {
            write_u32(out, self.st_name, e)?;
            out.push(self.st_info);
            out.push(self.st_other);
            write_u16(out, self.st_shndx, e)?;
            write_u64(out, self.st_value, e)?;
            write_u64(out, self.st_size, e)?;
        } else {
            write_u32(out, self.st_name, e)?;
            write_u32(out, self.st_value as u32, e)?;
            write_u32(out, self.st_size as u32, e)?;
            out.push(self.st_info);
            out.push(self.st_other);
            write_u16(out, self.st_shndx, e)?;
        }
        Ok(())
    }

    pub fn bind(&self) -> u8 {
        self.st_info >> 4
    }

    pub fn sym_type(&self) -> u8 {
        self.st_info & 0xf
    }

    pub fn is_weak(&self) -> bool {
        self.bind() == STB_WEAK || self.bind() == STB_GNU_UNIQUE
    }

    pub fn is_global(&self) -> bool {
        self.bind() == STB_GLOBAL
    }

    pub fn is_local(&self) -> bool {
        self.bind() == STB_LOCAL
    }

    pub fn is_undef(&self) -> bool {
        self.st_shndx as u32 == SHN_UNDEF
    }

    pub fn is_common(&self) -> bool {
        self.st_shndx as u32 == SHN_COMMON && self.sym_type() == STT_OBJECT
    }

    pub fn is_tls(&self) -> bool {
        self.sym_type() == STT_TLS
    }

    pub fn is_ifunc(&self) -> bool {
        self.sym_type() == STT_GNU_IFUNC
    }
}

/// A relocation-with-addend entry (RELA).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rela {
    pub r_offset: u64,
    pub r_sym: u32,
    pub r_type: u32,
    pub r_addend: i64,
}

impl Rela {
    pub fn size(ctx: Ctx) -> usize {
        if ctx.is_64() {
            24
        } else {
            12
        }
    }

    pub fn parse(bytes: &[u8], off: &mut usize, ctx: Ctx) -> Result<Rela> {
        let e = ctx.scroll_endian();
        if ctx.is_64() {
            let r_offset = bytes.gread_with(off, e)?;
            let r_info: u64 = bytes.gread_with(off, e)?;
            let r_addend: i64 = bytes.gread_with(off, e)?;
            Ok(Rela { r_offset, r_sym: (r_info >> 32) as u32, r_type: (r_info & 0xffff_ffff) as u32, r_addend })
        } else {
            let r_offset = bytes.gread_with::<u32>(off, e)? as u64;
            let r_info: u32 = bytes.gread_with(off, e)?;
            let r_addend = bytes.gread_with::<i32>(off, e)? as i64;
            Ok(Rela { r_offset, r_sym: r_info >> 8, r_type: r_info & 0xff, r_addend })
        }
    }

    pub fn write(&self, ctx: Ctx, out: &mut Vec<u8>) -> Result<()> {
        let e = ctx.scroll_endian();
        if ctx.is_64() {
            write_u64(out, self.r_offset, e)?;
            write_u64(out, ((self.r_sym as u64) << 32) | self.r_type as u64, e)?;
            write_u64(out, self.r_addend as u64, e)?;
        } else {
            write_u32(out, self.r_offset as u32, e)?;
            write_u32(out, (self.r_sym << 8) | (self.r_type & 0xff), e)?;
            write_u32(out, self.r_addend as u32, e)?;
        }
        Ok(())
    }
}

/// A relocation-without-addend entry (REL); addends are embedded in the
/// instruction bytes and read by the architecture backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rel {
    pub r_offset: u64,
    pub r_sym: u32,
    pub r_type: u32,
}

impl Rel {
    pub fn size(ctx: Ctx) -> usize {
        if ctx.is_64() {
            16
        } else {
            8
        }
    }

    pub fn parse(bytes: &[u8], off: &mut usize, ctx: Ctx) -> Result<Rel> {
        let e = ctx.scroll_endian();
        if ctx.is_64() {
            let r_offset = bytes.gread_with(off, e)?;
            let r_info: u64 = bytes.gread_with(off, e)?;
            Ok(Rel { r_offset, r_sym: (r_info >> 32) as u32, r_type: (r_info & 0xffff_ffff) as u32 })
        } else {
            let r_offset = bytes.gread_with::<u32>(off, e)? as u64;
            let r_info: u32 = bytes.gread_with(off, e)?;
            Ok(Rel { r_offset, r_sym: r_info >> 8, r_type: r_info & 0xff })
        }
    }
}

/// `.dynamic` entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dyn {
    pub d_tag: u64,
    pub d_val: u64,
}

impl Dyn {
    pub fn size(ctx: Ctx) -> usize {
        if ctx.is_64() {
            16
        } else {
            8
        }
    }

    pub fn parse(bytes: &[u8], off: &mut usize, ctx: Ctx) -> Result<Dyn> {
        let e = ctx.scroll_endian();
        if ctx.is_64() {
            Ok(Dyn { d_tag: bytes.gread_with(off, e)?, d_val: bytes.gread_with(off, e)? })
        } else {
            Ok(Dyn {
                d_tag: bytes.gread_with::<u32>(off, e)? as u64,
                d_val: bytes.gread_with::<u32>(off, e)? as u64,
            })
        }
    }

    pub fn write(&self, ctx: Ctx, out: &mut Vec<u8>) -> Result<()> {
        let e = ctx.scroll_endian();
        if ctx.is_64() {
            write_u64(out, self.d_tag, e)?;
            write_u64(out, self.d_val, e)?;
        } else {
            write_u32(out, self.d_tag as u32, e)?;
            write_u32(out, self.d_val as u32, e)?;
        }
        Ok(())
    }
}

/// ELF note header (`Nhdr`); name/descriptor bytes follow, 4-byte aligned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Nhdr {
    pub n_namesz: u32,
    pub n_descsz: u32,
    pub n_type: u32,
}

pub(crate) fn write_u16(out: &mut Vec<u8>, v: u16, e: ScrollEndian) -> Result<()> {
    let mut buf = [0u8; 2];
    buf.pwrite_with(v, 0, e)?;
    out.extend_from_slice(&buf);
    Ok(())
}

pub(crate) fn write_u32(out: &mut Vec<u8>, v: u32, e: ScrollEndian) -> Result<()> {
    let mut buf = [0u8; 4];
    buf.pwrite_with(v, 0, e)?;
    out.extend_from_slice(&buf);
    Ok(())
}

pub(crate) fn write_u64(out: &mut Vec<u8>, v: u64, e: ScrollEndian) -> Result<()> {
    let mut buf = [0u8; 8];
    buf.pwrite_with(v, 0, e)?;
    out.extend_from_slice(&buf);
    Ok(())
}

/// Extend the `ctx` trait helper with a `gread_with`-style fallible
/// cursor read, mirroring `scroll::Pread::gread_with` but over our local
/// `Result`.
trait GreadExt {
    fn gread_with<T>(&self, off: &mut usize, endian: ScrollEndian) -> Result<T>
    where
        T: for<'a> ctx::TryFromCtx<'a, ScrollEndian, Error = scroll::Error>;
}

impl GreadExt for [u8] {
    fn gread_with<T>(&self, off: &mut usize, endian: ScrollEndian) -> Result<T>
    where
        T: for<'a> ctx::TryFromCtx<'a, ScrollEndian, Error = scroll::Error>,
    {
        let v: T = self.pread_with(*off, endian)?;
        *off += core::mem::size_of::<T>();
        Ok(v)
    }
}
