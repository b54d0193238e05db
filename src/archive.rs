//! Parser for Unix archives (`.a`), including thin archives (`!<thin>\n`).
//!
//! SysV format: right-padded ASCII fixed fields, `/` name terminator,
//! long names indirected through a `//` member. Operates on byte slices
//! rather than `std::io`, since every input is already memory-mapped
//! (or loaded into a `Vec`) by the time parsing starts. The SysV symbol
//! index table is parsed only far enough to be skipped — symbols are
//! resolved by a full scan of member contents instead.

use crate::error::{LinkError, Result};

pub const MAGIC: &[u8; 8] = b"!<arch>\n";
pub const THIN_MAGIC: &[u8; 8] = b"!<thin>\n";

const HEADER_LEN: usize = 60;

/// One member of a regular (non-thin) archive: its parsed name and the
/// byte range of its content within the archive file.
#[derive(Debug, Clone)]
pub struct Member<'a> {
    pub name: String,
    pub data: &'a [u8],
}

/// A thin archive member is merely a name; the actual bytes live in a
/// sibling file that the caller must resolve and load.
#[derive(Debug, Clone)]
pub struct ThinMember {
    pub name: String,
}

pub enum Archive<'a> {
    Regular(Vec<Member<'a>>),
    Thin(Vec<ThinMember>),
}

fn trim_field(field: &[u8]) -> &[u8] {
    let mut end = field.len();
    while end > 0 && (field[end - 1] == b' ' || field[end - 1] == 0) {
        end -= 1;
    }
    &field[..end]
}

fn parse_decimal(field: &[u8]) -> Result<usize> {
    let field = trim_field(field);
    let s = std::str::from_utf8(field)
        .map_err(|_| LinkError::Malformed("non-utf8 archive header field".into()))?;
    if s.is_empty() {
        return Ok(0);
    }
    s.trim()
        .parse::<usize>()
        .map_err(|_| LinkError::Malformed(format!("bad archive size field {s:?}")))
}

/// Parse a whole archive; the regular/thin distinction is read directly
/// from the 8-byte magic.
pub fn parse(bytes: &[u8]) -> Result<Archive<'_>> {
    if bytes.len() >= 8 && &bytes[0..8] == MAGIC {
        Ok(Archive::Regular(parse_regular(bytes)?))
    } else if bytes.len() >= 8 && &bytes[0..8] == THIN_MAGIC {
        Ok(Archive::Thin(parse_thin(bytes)?))
    } else {
        Err(LinkError::Malformed("not an archive".into()))
    }
}

fn parse_regular(bytes: &[u8]) -> Result<Vec<Member<'_>>> {
    let mut members = Vec::new();
    let mut longnames: Option<&[u8]> = None;
    let mut off = 8usize;

    while off + HEADER_LEN <= bytes.len() {
        let header = &bytes[off..off + HEADER_LEN];
        let identifier = trim_field(&header[0..16]);
        let size = parse_decimal(&header[48..58])?;
        let data_start = off + HEADER_LEN;
        let data_end = data_start + size;
        if data_end > bytes.len() {
            return Err(LinkError::Malformed("archive member overruns file".into()));
        }
        let data = &bytes[data_start..data_end];

        if identifier == b"//" {
            // GNU long-name table: subsequent members whose identifier is
            // `/<offset>` look their real name up here.
            longnames = Some(data);
        } else if identifier == b"/" || identifier.is_empty() {
            // SysV symbol index table: skipped, symbols are resolved by full scan.
        } else if identifier.first() == Some(&b'/') {
            let idx: usize = std::str::from_utf8(&identifier[1..])
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| LinkError::Malformed("bad long-name reference".into()))?;
            let table = longnames
                .ok_or_else(|| LinkError::Malformed("long-name reference without table".into()))?;
            if idx >= table.len() {
                return Err(LinkError::Malformed("long-name offset out of range".into()));
            }
            let rest = &table[idx..];
            let end = rest
                .iter()
                .position(|&b| b == b'\n')
                .unwrap_or(rest.len());
            let mut name = &rest[..end];
            if name.last() == Some(&b'/') {
                name = &name[..name.len() - 1];
            }
            members.push(Member {
                name: String::from_utf8_lossy(name).into_owned(),
                data,
            });
        } else {
            let mut name = identifier;
            if name.last() == Some(&b'/') {
                name = &name[..name.len() - 1];
            }
            members.push(Member {
                name: String::from_utf8_lossy(name).into_owned(),
                data,
            });
        }

        // Members are two-byte aligned; a newline pads odd-sized members.
        off = data_end + (size % 2);
    }

    Ok(members)
}

fn parse_thin(bytes: &[u8]) -> Result<Vec<ThinMember>> {
    let mut members = Vec::new();
    let mut longnames: Option<&[u8]> = None;
    let mut off = 8usize;

    while off + HEADER_LEN <= bytes.len() {
        let header = &bytes[off..off + HEADER_LEN];
        let identifier = trim_field(&header[0..16]);
        let size = parse_decimal(&header[48..58])?;

        if identifier == b"//" {
            let data_start = off + HEADER_LEN;
            longnames = Some(&bytes[data_start..data_start + size]);
        } else if identifier == b"/" || identifier.is_empty() {
            // symbol index, skipped
        } else if identifier.first() == Some(&b'/') {
            let idx: usize = std::str::from_utf8(&identifier[1..])
                .ok()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| LinkError::Malformed("bad long-name reference".into()))?;
            let table = longnames
                .ok_or_else(|| LinkError::Malformed("long-name reference without table".into()))?;
            let rest = &table[idx..];
            let end = rest.iter().position(|&b| b == b'\n').unwrap_or(rest.len());
            let mut name = &rest[..end];
            if name.last() == Some(&b'/') {
                name = &name[..name.len() - 1];
            }
            members.push(ThinMember {
                name: String::from_utf8_lossy(name).into_owned(),
            });
        } else {
            let mut name = identifier;
            if name.last() == Some(&b'/') {
                name = &name[..name.len() - 1];
            }
            members.push(ThinMember {
                name: String::from_utf8_lossy(name).into_owned(),
            });
        }

        // thin archive members store no data inline; the header is not
        // followed by content, so no size-based skip is applied here.
        off += HEADER_LEN;
    }

    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad(field: &str, width: usize) -> Vec<u8> {
        let mut v = field.as_bytes().to_vec();
        v.resize(width, b' ');
        v
    }

    fn build_member(name: &str, data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend(pad(name, 16));
        out.extend(pad("0", 12));
        out.extend(pad("0", 6));
        out.extend(pad("0", 6));
        out.extend(pad("100644", 8));
        out.extend(pad(&data.len().to_string(), 10));
        out.extend(b"\x60\n");
        out.extend(data);
        if data.len() % 2 == 1 {
            out.push(b'\n');
        }
        out
    }

    #[test]
    fn parses_two_short_names() {
        let mut bytes = MAGIC.to_vec();
        bytes.extend(build_member("a.o/", b"hello"));
        bytes.extend(build_member("bb.o/", b"world!"));
        let archive = parse(&bytes).unwrap();
        match archive {
            Archive::Regular(members) => {
                assert_eq!(members.len(), 2);
                assert_eq!(members[0].name, "a.o");
                assert_eq!(members[0].data, b"hello");
                assert_eq!(members[1].name, "bb.o");
                assert_eq!(members[1].data, b"world!");
            }
            Archive::Thin(_) => panic!("expected regular archive"),
        }
    }
}
