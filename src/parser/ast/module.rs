//! Top-level module node.

use super::{Atom, Const, FunDef, FunName};

/// A parsed `module ... end` unit.
///
/// The export list and the definitions are kept exactly as written; nothing
/// checks that every export is defined.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: Atom,
    pub exports: Vec<FunName>,
    pub attributes: Vec<(Atom, Const)>,
    pub defs: Vec<FunDef>,
}

impl Module {
    /// Look up a definition by name and arity.
    #[must_use]
    pub fn find_def(&self, name: &FunName) -> Option<&FunDef> {
        self.defs.iter().find(|def| &def.name.node == name)
    }

    /// Look up an attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Const> {
        self.attributes
            .iter()
            .find(|(k, _)| k.as_str() == key)
            .map(|(_, v)| v)
    }
}
