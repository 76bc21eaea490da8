use crate::addresses::AddressList;


/// Outcome of scanning the address list for a prefix.
///
/// `count` stops growing at 2 because callers only ask whether exactly one
/// address matched. `found` holds the first matching address in list order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub count: usize,
    pub found: Option<String>,
}

impl MatchResult {
    /// Returns the matched address when it is the only one.
    pub fn unique(&self) -> Option<&str> {
        match self.count {
            1 => self.found.as_deref(),
            _ => None,
        }
    }
}


/// Counts the addresses that start with `prefix` and captures the first one.
///
/// # Arguments
/// - `prefix`: The normalized prefix. An empty prefix matches every address.
/// - `addresses`: The loaded address list.
///
/// # Returns
/// A `MatchResult`. Scanning ends as soon as a second match is seen, so
/// identical duplicate entries count as separate matches.
pub fn find_address(prefix: &str, addresses: &AddressList) -> MatchResult {
    let mut result = MatchResult::default();

    for address in addresses {
        if !address.as_bytes().starts_with(prefix.as_bytes()) {
            continue;
        }
        if result.count == 0 {
            result.found = Some(address.clone());
        }
        result.count += 1;
        if result.count > 1 {
            break;
        }
    }

    result
}
