use std::collections::BTreeSet;
use std::fmt;

use crate::addresses::AddressList;


/// The distinct characters that may follow a prefix, kept in code-point order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedChars {
    chars: BTreeSet<char>,
}

impl AllowedChars {
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    fn insert(&mut self, c: char) {
        // Fold before insertion so the rendered set stays sorted and duplicate-free.
        self.chars.insert(c.to_ascii_uppercase());
    }
}

impl fmt::Display for AllowedChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}


/// Collects the characters that could extend `prefix` across the address list.
///
/// # Arguments
/// - `prefix`: The normalized prefix.
/// - `addresses`: The loaded address list.
///
/// # Returns
/// For every address starting with `prefix` and longer than it, the character
/// right after the prefix, uppercased with the ASCII mapping. The set is empty
/// when nothing extends past the prefix.
///
/// # Example
/// With `BRNO`, `BRATISLAVA` and `BUDAPEST` loaded, the prefix `B` yields `RU`.
pub fn allowed_chars(prefix: &str, addresses: &AddressList) -> AllowedChars {
    let mut allowed = AllowedChars::default();

    for address in addresses {
        if !address.as_bytes().starts_with(prefix.as_bytes()) {
            continue;
        }
        // A byte-wise match of a whole string ends on a character boundary.
        if let Some(next) = address[prefix.len()..].chars().next() {
            allowed.insert(next);
        }
    }

    allowed
}


#[cfg(test)]
mod tests {
    use super::*;

    fn list(entries: &[&str]) -> AddressList {
        let mut addresses = AddressList::with_capacity(entries.len());
        for entry in entries {
            addresses.push(entry.to_string());
        }
        addresses
    }

    #[test]
    fn dedups_next_characters() {
        let allowed = allowed_chars("B", &list(&["BRNO", "BRATISLAVA"]));
        assert_eq!(allowed.to_string(), "R");
    }

    #[test]
    fn sorts_by_code_point() {
        let allowed = allowed_chars("B", &list(&["BUDAPEST", "BRNO", "BRATISLAVA"]));
        assert_eq!(allowed.to_string(), "RU");
        assert_eq!(allowed.len(), 2);
    }

    #[test]
    fn empty_prefix_yields_first_letters() {
        let allowed = allowed_chars("", &list(&["PRAGUE", "BRNO", "PLZEN", ""]));
        assert_eq!(allowed.to_string(), "BP");
    }

    #[test]
    fn empty_list_yields_empty_set() {
        assert!(allowed_chars("", &list(&[])).is_empty());
        assert!(allowed_chars("A", &list(&[])).is_empty());
    }

    #[test]
    fn exact_matches_do_not_contribute() {
        assert!(allowed_chars("BRNO", &list(&["BRNO", "PRAGUE"])).is_empty());
        assert_eq!(allowed_chars("BRNO", &list(&["BRNO", "BRNOX"])).to_string(), "X");
    }

    #[test]
    fn mixed_case_input_is_folded() {
        let allowed = allowed_chars("A", &list(&["Ab", "AB", "Ac"]));
        assert_eq!(allowed.to_string(), "BC");
    }

    #[test]
    fn punctuation_stays_in_ascending_order() {
        let allowed = allowed_chars("A", &list(&["A[", "Ab", "A "]));
        assert_eq!(allowed.to_string(), " B[");
    }

    #[test]
    fn multibyte_next_character() {
        let allowed = allowed_chars("PLZE", &list(&["PLZEň", "PLZEN"]));
        assert_eq!(allowed.to_string(), "Nň");
    }
}
