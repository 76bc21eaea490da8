/// External crates for the address loader
use std::io::{self, BufRead, ErrorKind, Read};
use std::slice;

use crate::filterconfig::FilterConfig;


/// An ordered, capacity-checked list of case-normalized addresses.
///
/// Entries keep their input order. Once the list holds `capacity` entries
/// further pushes are refused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddressList {
    entries: Vec<String>,
    capacity: usize,
}

impl AddressList {
    /// Creates an empty list that accepts at most `capacity` addresses.
    pub fn with_capacity(capacity: usize) -> Self {
        AddressList {
            entries: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends an address, returning `false` when the list is already full.
    pub fn push(&mut self, address: String) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries.push(address);
        true
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a AddressList {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


/// Reads addresses line by line until the list is full or input ends.
///
/// # Arguments
/// - `reader`: The buffered source, normally locked standard input.
/// - `config`: Supplies the address count and length bounds.
///
/// # Returns
/// The loaded `AddressList`. Each entry has one trailing `\n` removed,
/// is cut to `max_address_length` input bytes and is uppercased with the
/// ASCII mapping. Empty lines are kept as empty entries.
///
/// # Notes
/// - Lines after the last accepted one are left unread.
/// - At most `max_address_length + 1` bytes of a line are buffered; the tail
///   of an overlong line is skipped, not carried into the next entry.
/// - Invalid UTF-8 is decoded lossily after the cut instead of failing the run.
pub fn load_addresses<R: BufRead>(reader: &mut R, config: &FilterConfig) -> io::Result<AddressList> {
    let mut addresses = AddressList::with_capacity(config.max_addresses);
    let limit = config.max_address_length as u64 + 1;
    let mut buffer = Vec::with_capacity(config.max_address_length + 1);

    while !addresses.is_full() {
        buffer.clear();
        if reader.by_ref().take(limit).read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        if buffer.last() == Some(&b'\n') {
            buffer.pop();
        } else if buffer.len() > config.max_address_length {
            skip_line(reader)?;
        }

        truncate_raw(&mut buffer, config.max_address_length);
        let mut address = String::from_utf8_lossy(&buffer).into_owned();
        address.make_ascii_uppercase();
        addresses.push(address);
    }

    Ok(addresses)
}


/// Consumes input up to and including the next `\n`, without buffering it.
fn skip_line<R: BufRead>(reader: &mut R) -> io::Result<()> {
    loop {
        let (used, done) = {
            let available = match reader.fill_buf() {
                Ok(available) => available,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            if available.is_empty() {
                return Ok(());
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (available.len(), false),
            }
        };
        reader.consume(used);
        if done {
            return Ok(());
        }
    }
}


/// Cuts raw line bytes to `max_length`, dropping a UTF-8 sequence split by the cut.
fn truncate_raw(bytes: &mut Vec<u8>, max_length: usize) {
    if bytes.len() <= max_length {
        return;
    }
    bytes.truncate(max_length);

    let tail = bytes.len().saturating_sub(3);
    if let Some(lead) = (tail..bytes.len()).rev().find(|&i| bytes[i] & 0xC0 != 0x80) {
        let width = match bytes[lead] {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        if lead + width > bytes.len() {
            bytes.truncate(lead);
        }
    }
}


/// Normalizes the raw prefix argument the same way stored addresses are.
pub fn normalize_prefix(raw: &str, max_length: usize) -> String {
    let mut prefix = raw.to_string();
    truncate_on_boundary(&mut prefix, max_length);
    prefix.make_ascii_uppercase();
    prefix
}


/// Cuts `text` to at most `max_length` bytes without splitting a character.
fn truncate_on_boundary(text: &mut String, max_length: usize) {
    if text.len() <= max_length {
        return;
    }
    let mut end = max_length;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    text.truncate(end);
}
