//! Name bookkeeping for one generation.
//!
//! ## Notes
//! - The import set and the global set keep first-insertion order; the header and the closure footer list names in
//!   that order.
//! - Parameters shadow library symbols: inside a function with a parameter `normal`, a reference to `normal` must
//!   not import anything.

use std::collections::{HashMap, HashSet};

use indexmap::IndexSet;
use nodeshade_core::lang::library;
use nodeshade_syntax::Node;

/// Property names that are never imported even when the library exports them.
const RESERVED_NAMES: &[&str] = &["name"];

#[derive(Debug, Default)]
pub(super) struct Scope {
    imports: IndexSet<String>,
    globals: IndexSet<String>,
    params: HashSet<String>,
}

impl Scope {
    /// Import the root of `name` (the part before the first `.`) when it is a library symbol that no global,
    /// parameter, or reserved name shadows.
    pub(super) fn add_import(&mut self, name: &str) {
        let root = name.split('.').next().unwrap_or(name);
        if library::is_symbol(root)
            && !self.globals.contains(root)
            && !self.params.contains(root)
            && !RESERVED_NAMES.contains(&root)
        {
            self.imports.insert(root.to_string());
        }
    }

    /// Import a combinator the emitted structure itself depends on (`Fn`, `If`, `Loop`, `Switch`).
    pub(super) fn require(&mut self, name: &str) {
        self.imports.insert(name.to_string());
    }

    pub(super) fn add_global(&mut self, name: &str) {
        self.globals.insert(name.to_string());
    }

    /// Bind the names of the function about to be emitted.
    pub(super) fn enter_function(&mut self, params: impl IntoIterator<Item = String>) {
        self.params = params.into_iter().collect();
    }

    pub(super) fn exit_function(&mut self) {
        self.params.clear();
    }

    pub(super) fn imports(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    pub(super) fn globals(&self) -> impl Iterator<Item = &str> {
        self.globals.iter().map(String::as_str)
    }
}

/// Position of a function within its overload group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct OverloadMember {
    pub index: usize,
    pub group_len: usize,
}

impl OverloadMember {
    pub(super) fn is_last(self) -> bool {
        self.index + 1 == self.group_len
    }
}

/// Top-level function names declared more than once, mapped to the statement indices that declare them.
#[derive(Debug, Default)]
pub(super) struct OverloadTable {
    groups: HashMap<String, Vec<usize>>,
}

impl OverloadTable {
    pub(super) fn build(body: &[Node]) -> Self {
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, stmt) in body.iter().enumerate() {
            if let Node::FunctionDeclaration(f) = stmt {
                groups.entry(f.name.clone()).or_default().push(idx);
            }
        }
        groups.retain(|_, members| members.len() > 1);
        if !groups.is_empty() {
            tracing::debug!(groups = groups.len(), "overloaded functions found");
        }
        Self { groups }
    }

    /// Overload position of the function declared by statement `stmt_index`, or `None` if its name is unique.
    pub(super) fn member(&self, name: &str, stmt_index: usize) -> Option<OverloadMember> {
        let members = self.groups.get(name)?;
        let index = members.iter().position(|&idx| idx == stmt_index)?;
        Some(OverloadMember {
            index,
            group_len: members.len(),
        })
    }
}
