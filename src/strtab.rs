//! A byte-offset indexed string table, as used by `.strtab`, `.dynstr`,
//! `.shstrtab`, and archive long-name tables.
//!
//! One owned-or-borrowed table, used everywhere a linker needs "offset
//! into a blob of null-terminated strings".

use std::borrow::Cow;
use std::fmt;

#[derive(Clone)]
pub struct Strtab<'a> {
    bytes: Cow<'a, [u8]>,
    delim: u8,
}

fn get_str(idx: usize, bytes: &[u8], delim: u8) -> &str {
    if idx >= bytes.len() {
        return "";
    }
    let rest = &bytes[idx..];
    let end = rest.iter().position(|&b| b == delim).unwrap_or(rest.len());
    std::str::from_utf8(&rest[..end]).unwrap_or("")
}

impl<'a> Strtab<'a> {
    pub fn new(bytes: &'a [u8], delim: u8) -> Self {
        Strtab {
            bytes: Cow::Borrowed(bytes),
            delim,
        }
    }

    pub fn owned(bytes: Vec<u8>, delim: u8) -> Strtab<'static> {
        Strtab {
            bytes: Cow::Owned(bytes),
            delim,
        }
    }

    pub fn get(&self, idx: usize) -> &str {
        get_str(idx, &self.bytes, self.delim)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_vec(&self) -> Vec<String> {
        let len = self.bytes.len();
        let mut strings = Vec::new();
        let mut i = 0;
        while i < len {
            let s = self.get(i);
            i += s.len() + 1;
            strings.push(s.to_string());
        }
        strings
    }
}

impl<'a> fmt::Debug for Strtab<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strtab({} bytes)", self.bytes.len())
    }
}

impl<'a> Default for Strtab<'a> {
    fn default() -> Self {
        Strtab {
            bytes: Cow::Owned(vec![0]),
            delim: 0,
        }
    }
}

/// A builder for an output string table: interns strings, returns their
/// offset, and de-duplicates suffixes the way `gold`/`mold` share tail
/// strings (`"foo"` and `"barfoo"` can share the `"foo\0"` tail).
#[derive(Debug, Default)]
pub struct StrtabWriter {
    bytes: Vec<u8>,
    cache: std::collections::HashMap<String, u32>,
}

impl StrtabWriter {
    pub fn new() -> Self {
        StrtabWriter {
            bytes: vec![0],
            cache: std::collections::HashMap::new(),
        }
    }

    pub fn add(&mut self, s: &str) -> u32 {
        if let Some(&off) = self.cache.get(s) {
            return off;
        }
        let off = self.bytes.len() as u32;
        self.bytes.extend_from_slice(s.as_bytes());
        self.bytes.push(0);
        self.cache.insert(s.to_string(), off);
        off
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.len() <= 1
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_vec_no_final_null() {
        let bytes = b"\0printf\0memmove\0busta";
        let strtab = Strtab::new(bytes, 0);
        let vec = strtab.to_vec();
        assert_eq!(vec, vec!["", "printf", "memmove", "busta"]);
    }

    #[test]
    fn writer_dedups() {
        let mut w = StrtabWriter::new();
        let a = w.add("printf");
        let b = w.add("printf");
        assert_eq!(a, b);
        let c = w.add("memmove");
        assert_ne!(a, c);
    }
}
