use crate::error::Error;
use crate::overload::{InterpFn, NativeFn, Overload};
use log::debug;
use std::collections::BTreeMap;

/// What a node reports when none of its overloads match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Miss {
    #[default]
    Overload,
    Method,
    Constructor,
}

impl Miss {
    pub(crate) fn error(self) -> Error {
        match self {
            Miss::Overload => Error::NoMatchingOverload,
            Miss::Method => Error::NoMatchingMethod,
            Miss::Constructor => Error::NoConstructor,
        }
    }
}

/// A node of the subcommand tree: overloads in registration order plus
/// named children.
#[derive(Debug, Clone, Default)]
pub struct Command {
    name: String,
    overloads: Vec<Overload>,
    children: BTreeMap<String, Command>,
    miss: Miss,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Command {
            name: name.into(),
            ..Default::default()
        }
    }

    pub(crate) fn with_miss(name: impl Into<String>, miss: Miss) -> Self {
        Command {
            name: name.into(),
            miss,
            ..Default::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn overloads(&self) -> &[Overload] {
        &self.overloads
    }

    pub fn subcommand(&self, name: &str) -> Option<&Command> {
        self.children.get(name)
    }

    pub fn subcommand_names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub(crate) fn miss(&self) -> Error {
        self.miss.error()
    }

    pub fn add_overload(&mut self, overload: Overload) -> &mut Self {
        debug!(
            "{}: overload #{} with arity {}",
            self.name,
            self.overloads.len(),
            overload.arity()
        );
        self.overloads.push(overload);
        self
    }

    pub fn add_function<Args, F: NativeFn<Args>>(&mut self, f: F) -> &mut Self {
        self.add_overload(f.into_overload())
    }

    /// Register a function whose first parameter is the interpreter itself.
    pub fn add_function_with_interp<Args, F: InterpFn<Args>>(&mut self, f: F) -> &mut Self {
        self.add_overload(f.into_overload())
    }

    /// Create or fetch the child node `name`.
    pub fn add_subcommand(&mut self, name: &str) -> &mut Command {
        let miss = self.miss;
        let parent = &self.name;
        self.children
            .entry(name.to_string())
            .or_insert_with(|| Command::with_miss(format!("{parent} {name}"), miss))
    }

    pub(crate) fn add_child(&mut self, name: &str, miss: Miss) -> &mut Command {
        let child = self.add_subcommand(name);
        child.miss = miss;
        child
    }
}
