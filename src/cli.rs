//! Command-line surface.
//!
//! Covers the flags that drive the linking pipeline: inputs, output
//! path, PIC/PIE/static mode, GC/ICF toggles, dynamic-linking options
//! and `-z` suboptions. Linker scripts and `@response-file` expansion
//! are not handled here. Built with `clap`'s derive API.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HashStyle {
    Sysv,
    Gnu,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IcfMode {
    None,
    All,
    Safe,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PackDynRelocs {
    None,
    Relr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UnresolvedSymbols {
    ReportAll,
    IgnoreAll,
    IgnoreInObjectFiles,
    IgnoreInSharedLibs,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildIdKind {
    None,
    Md5,
    Sha1,
    Sha256,
    Uuid,
    Hex(Vec<u8>),
}

/// `-z` suboptions; parsed by hand from repeated `-z KEY[=VALUE]` flags
/// since clap's derive can't express this free-form grammar directly.
#[derive(Debug, Clone, Default)]
pub struct ZOptions {
    pub now: bool,
    pub lazy: bool,
    pub relro: bool,
    pub norelro: bool,
    pub defs: bool,
    pub nodefs: bool,
    pub execstack: bool,
    pub noexecstack: bool,
    pub text: bool,
    pub notext: bool,
    pub copyreloc: bool,
    pub nocopyreloc: bool,
    pub initfirst: bool,
    pub interpose: bool,
    pub ibt: bool,
    pub shstk: bool,
    pub origin: bool,
    pub nodlopen: bool,
    pub nodelete: bool,
    pub separate_code: bool,
    pub noseparate_code: bool,
    pub max_page_size: Option<u64>,
}

impl ZOptions {
    pub fn parse(values: &[String]) -> Self {
        let mut z = ZOptions {
            relro: true,
            ..ZOptions::default()
        };
        for v in values {
            match v.as_str() {
                "now" => z.now = true,
                "lazy" => z.lazy = true,
                "relro" => {
                    z.relro = true;
                    z.norelro = false;
                }
                "norelro" => {
                    z.norelro = true;
                    z.relro = false;
                }
                "defs" => z.defs = true,
                "nodefs" => z.nodefs = true,
                "execstack" => z.execstack = true,
                "noexecstack" => z.noexecstack = true,
                "text" => z.text = true,
                "notext" => z.notext = true,
                "copyreloc" => z.copyreloc = true,
                "nocopyreloc" => z.nocopyreloc = true,
                "initfirst" => z.initfirst = true,
                "interpose" => z.interpose = true,
                "ibt" => z.ibt = true,
                "shstk" => z.shstk = true,
                "origin" => z.origin = true,
                "nodlopen" => z.nodlopen = true,
                "nodelete" => z.nodelete = true,
                "separate-code" => z.separate_code = true,
                "noseparate-code" => z.noseparate_code = true,
                other => {
                    if let Some(n) = other.strip_prefix("max-page-size=") {
                        z.max_page_size = n.parse().ok();
                    }
                }
            }
        }
        z
    }
}

#[derive(Debug, Parser)]
#[command(name = "mallard", about = "A parallel ELF linker core")]
pub struct Cli {
    /// Input files: objects, archives, or shared objects.
    pub inputs: Vec<PathBuf>,

    #[arg(short = 'o', default_value = "a.out")]
    pub output: PathBuf,

    #[arg(long = "shared", conflicts_with = "pie")]
    pub shared: bool,

    #[arg(long = "pie", overrides_with = "no_pie")]
    pub pie: bool,

    #[arg(long = "no-pie")]
    pub no_pie: bool,

    #[arg(long = "static", overrides_with = "bdynamic")]
    pub bstatic: bool,

    #[arg(long = "Bdynamic")]
    pub bdynamic: bool,

    #[arg(short = 'r', long = "relocatable")]
    pub relocatable: bool,

    #[arg(short = 'e', long = "entry")]
    pub entry: Option<String>,

    #[arg(long = "init")]
    pub init: Option<String>,

    #[arg(long = "fini")]
    pub fini: Option<String>,

    #[arg(long = "soname")]
    pub soname: Option<String>,

    #[arg(long = "rpath")]
    pub rpath: Vec<String>,

    #[arg(short = 'L')]
    pub search_dirs: Vec<PathBuf>,

    #[arg(short = 'l')]
    pub libs: Vec<String>,

    #[arg(long = "dynamic-linker")]
    pub dynamic_linker: Option<String>,

    #[arg(long = "eh-frame-hdr")]
    pub eh_frame_hdr: bool,

    #[arg(long = "hash-style", value_enum, default_value_t = HashStyle::Both)]
    pub hash_style: HashStyle,

    #[arg(long = "build-id")]
    pub build_id: Option<String>,

    #[arg(long = "gc-sections")]
    pub gc_sections: bool,

    #[arg(long = "icf", value_enum, default_value_t = IcfMode::None)]
    pub icf: IcfMode,

    #[arg(long = "pack-dyn-relocs", value_enum, default_value_t = PackDynRelocs::None)]
    pub pack_dyn_relocs: PackDynRelocs,

    #[arg(long = "export-dynamic", short = 'E')]
    pub export_dynamic: bool,

    #[arg(long = "undefined")]
    pub force_undefined: Vec<String>,

    #[arg(long = "require-defined")]
    pub require_defined: Vec<String>,

    #[arg(long = "version-script")]
    pub version_script: Option<PathBuf>,

    #[arg(long = "dynamic-list")]
    pub dynamic_list: Option<PathBuf>,

    #[arg(long = "exclude-libs")]
    pub exclude_libs: Vec<String>,

    #[arg(long = "Bsymbolic")]
    pub bsymbolic: bool,

    #[arg(long = "Bsymbolic-functions")]
    pub bsymbolic_functions: bool,

    #[arg(long = "defsym")]
    pub defsym: Vec<String>,

    #[arg(long = "wrap")]
    pub wrap: Vec<String>,

    #[arg(long = "image-base")]
    pub image_base: Option<String>,

    #[arg(short = 'z')]
    pub z_flags: Vec<String>,

    #[arg(long = "relax", overrides_with = "no_relax")]
    pub relax: bool,

    #[arg(long = "no-relax")]
    pub no_relax: bool,

    #[arg(long = "threads", overrides_with = "no_threads")]
    pub threads: bool,

    #[arg(long = "no-threads")]
    pub no_threads: bool,

    #[arg(long = "thread-count")]
    pub thread_count: Option<usize>,

    #[arg(long = "shuffle-sections")]
    pub shuffle_sections: Option<Option<u64>>,

    #[arg(long = "unresolved-symbols", value_enum, default_value_t = UnresolvedSymbols::ReportAll)]
    pub unresolved_symbols: UnresolvedSymbols,

    #[arg(long = "unique")]
    pub unique: Vec<String>,

    #[arg(long = "warn-unresolved-symbols")]
    pub warn_unresolved_symbols: bool,

    #[arg(long = "demangle", default_value_t = true)]
    pub demangle: bool,

    #[arg(long = "fatal-warnings")]
    pub fatal_warnings: bool,

    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub fn image_base_value(&self) -> u64 {
        match &self.image_base {
            None => {
                if self.is_pic() {
                    0
                } else {
                    0x200000
                }
            }
            Some(s) => {
                let s = s.trim_start_matches("0x");
                u64::from_str_radix(s, 16).unwrap_or(0x200000)
            }
        }
    }

    pub fn is_pic(&self) -> bool {
        self.shared || (self.pie && !self.no_pie)
    }

    pub fn is_static(&self) -> bool {
        self.bstatic && !self.bdynamic
    }

    pub fn build_id_kind(&self) -> BuildIdKind {
        match self.build_id.as_deref() {
            None => BuildIdKind::None,
            Some("none") => BuildIdKind::None,
            Some("md5") => BuildIdKind::Md5,
            Some("sha1") | Some("tree") => BuildIdKind::Sha1,
            Some("sha256") => BuildIdKind::Sha256,
            Some("uuid") => BuildIdKind::Uuid,
            Some(hex) if hex.starts_with("0x") => {
                let bytes = hex_to_bytes(&hex[2..]);
                BuildIdKind::Hex(bytes)
            }
            Some(_) => BuildIdKind::Sha1,
        }
    }
}

fn hex_to_bytes(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len() / 2);
    let mut chars = s.as_bytes().chunks(2);
    while let Some(pair) = chars.next() {
        if pair.len() == 2 {
            if let Ok(b) = u8::from_str_radix(std::str::from_utf8(pair).unwrap_or("00"), 16) {
                out.push(b);
            }
        }
    }
    out
}
