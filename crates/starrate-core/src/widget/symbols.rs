//! Symbol list derivation.

use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// One symbol of the rating row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Symbol {
    /// Whether the symbol lies within the displayed rating.
    pub active: bool,
}

/// Ordered, read-only list of symbols.
///
/// A list is always rebuilt from scratch by [`derive_symbol_list`]; it has no
/// mutating API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct SymbolList(Vec<Symbol>);

impl SymbolList {
    /// Number of active symbols at the start of the list.
    pub fn active_count(&self) -> usize {
        self.0.iter().take_while(|symbol| symbol.active).count()
    }

    /// View the list as a slice.
    pub fn as_slice(&self) -> &[Symbol] {
        &self.0
    }
}

impl Deref for SymbolList {
    type Target = [Symbol];

    fn deref(&self) -> &[Symbol] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a SymbolList {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Build the symbol list for `active_count` active symbols out of `symbol_count`.
///
/// Symbol `i` is active iff `i <= active_count - 1`. Counts larger than
/// `symbol_count` simply activate every symbol.
pub fn derive_symbol_list(active_count: u32, symbol_count: u32) -> SymbolList {
    SymbolList(
        (0..symbol_count)
            .map(|i| Symbol {
                active: i < active_count,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(list: &SymbolList) -> Vec<bool> {
        list.iter().map(|s| s.active).collect()
    }

    #[test]
    fn test_derive_prefix() {
        let list = derive_symbol_list(2, 5);
        assert_eq!(flags(&list), vec![true, true, false, false, false]);
        assert_eq!(list.active_count(), 2);
    }

    #[test]
    fn test_derive_none_and_all() {
        assert_eq!(derive_symbol_list(0, 3).active_count(), 0);
        assert_eq!(derive_symbol_list(3, 3).active_count(), 3);
        assert_eq!(derive_symbol_list(10, 3).len(), 3);
    }

    #[test]
    fn test_derive_empty_row() {
        assert!(derive_symbol_list(0, 0).is_empty());
        assert!(derive_symbol_list(4, 0).is_empty());
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_string(&derive_symbol_list(1, 2)).unwrap();
        assert_eq!(json, r#"[{"active":true},{"active":false}]"#);
    }
}
