//! The host side: a command table and a result slot.
//!
//! This is not a language. Words come in already split (or are split with
//! the list syntax) and the first word names the command.

use crate::cast::IntoValue;
use crate::class::{self, Handle};
use crate::command::{Command, Miss};
use crate::dispatch;
use crate::error::Error;
use crate::overload::Reply;
use log::{debug, trace};
use memory::{obj_type, parse_list, Value};
use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

pub(crate) struct Registrations {
    commands: HashMap<String, Rc<Command>>,
    classes: HashMap<TypeId, Rc<Command>>,
}

/// Completion code of an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Code {
    Ok,
    Error,
}

pub struct Interp {
    commands: HashMap<String, Rc<Command>>,
    classes: HashMap<TypeId, Rc<Command>>,
    instances: HashMap<String, Rc<Handle>>,
    packages: BTreeMap<String, String>,
    result: Value,
    code: Code,
}

impl std::fmt::Debug for Interp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interp")
            .field("packages", &self.packages)
            .field("code", &self.code)
            .finish_non_exhaustive()
    }
}

impl Default for Interp {
    fn default() -> Self {
        Self::new()
    }
}

impl Interp {
    pub fn new() -> Self {
        Interp {
            commands: HashMap::new(),
            classes: HashMap::new(),
            instances: HashMap::new(),
            packages: BTreeMap::new(),
            result: Value::empty(),
            code: Code::Ok,
        }
    }

    // --- Command table ---

    /// Create or fetch the root node `name`.
    pub fn create_command(&mut self, name: &str) -> &mut Command {
        let entry = self
            .commands
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!("creating command {:?}", name);
                Rc::new(Command::new(name))
            });
        Rc::make_mut(entry)
    }

    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name).map(|c| &**c)
    }

    pub fn has_command(&self, name: &str) -> bool {
        self.commands.contains_key(name) || self.instances.contains_key(name)
    }

    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// Remove a command or an instance handle. Returns whether anything
    /// was removed.
    pub fn delete_command(&mut self, name: &str) -> bool {
        self.commands.remove(name).is_some() || self.destroy_instance(name)
    }

    /// Copy of the command and class tables. Nodes are shared, so this
    /// only clones pointers; later edits go through `Rc::make_mut` and
    /// leave the copy untouched.
    pub(crate) fn registrations(&self) -> Registrations {
        Registrations {
            commands: self.commands.clone(),
            classes: self.classes.clone(),
        }
    }

    pub(crate) fn restore(&mut self, saved: Registrations) {
        self.commands = saved.commands;
        self.classes = saved.classes;
    }

    // --- Classes and instances ---

    pub(crate) fn class_methods(&self, class: TypeId) -> Option<Rc<Command>> {
        self.classes.get(&class).cloned()
    }

    pub(crate) fn class_methods_mut(&mut self, class: TypeId, name: &str) -> &mut Command {
        let entry = self
            .classes
            .entry(class)
            .or_insert_with(|| Rc::new(Command::with_miss(name, Miss::Method)));
        Rc::make_mut(entry)
    }

    pub(crate) fn destroy_instance(&mut self, name: &str) -> bool {
        match self.instances.remove(name) {
            Some(handle) => {
                handle.mark_destroyed();
                debug!("destroyed instance {}", name);
                true
            }
            None => false,
        }
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    // --- Packages ---

    pub(crate) fn provide(&mut self, name: &str, version: &str) {
        self.packages.insert(name.to_string(), version.to_string());
    }

    /// Version of a loaded package.
    pub fn provided(&self, name: &str) -> Option<&str> {
        self.packages.get(name).map(String::as_str)
    }

    pub fn packages(&self) -> impl Iterator<Item = (&str, &str)> {
        self.packages.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    // --- Evaluation ---

    /// Run one command. `objv[0]` names it. Errors come back as values;
    /// nothing unwinds out of here.
    pub fn invoke(&mut self, objv: &[Value]) -> Result<Reply, Error> {
        let Some(word) = objv.first() else {
            return Ok(Reply::NoValue);
        };
        if let Some(command) = self.commands.get(word.as_str()).cloned() {
            return dispatch::dispatch(self, &command, objv);
        }
        if let Some(handle) = self.instances.get(word.as_str()).cloned() {
            return class::invoke_instance(self, handle, objv);
        }
        Err(Error::UnknownCommand(word.as_str().to_string()))
    }

    pub fn eval_objv(&mut self, objv: &[Value]) -> Code {
        match self.invoke(objv) {
            Ok(reply) => {
                self.set_result(reply.into_value());
                Code::Ok
            }
            Err(err) => {
                self.set_error(err);
                Code::Error
            }
        }
    }

    /// Split `line` with the list syntax and run it as one command.
    pub fn eval_words(&mut self, line: &str) -> Code {
        match parse_list(line) {
            Ok(words) => {
                let objv: Vec<Value> = words.into_iter().map(Value::string).collect();
                self.eval_objv(&objv)
            }
            Err(err) => {
                self.set_error(err.into());
                Code::Error
            }
        }
    }

    /// Run each non-blank, non-comment line as a command; stop at the
    /// first error.
    pub fn eval(&mut self, script: &str) -> Code {
        self.set_result(Value::empty());
        for line in script.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if self.eval_words(line) == Code::Error {
                return Code::Error;
            }
        }
        Code::Ok
    }

    // --- Result slot ---

    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn code(&self) -> Code {
        self.code
    }

    /// Set a successful result. Class instances that pass through here
    /// become callable by their handle name, unless they were destroyed.
    pub fn set_result(&mut self, value: Value) {
        if let Some(handle) = value
            .opaque_ref::<Handle>()
            .filter(|handle| !handle.is_destroyed())
        {
            self.instances
                .entry(handle.name().to_string())
                .or_insert(handle);
        }
        self.result = value;
        self.code = Code::Ok;
    }

    pub fn set_error(&mut self, err: Error) {
        trace!("command failed: {}", err);
        self.result = err.into_value();
        self.code = Code::Error;
    }

    /// The last result, or the error it holds, as the original error
    /// object when one was captured.
    pub fn throw_result(&self) -> Result<Value, Rc<Error>> {
        if self.code == Code::Ok {
            return Ok(self.result.clone());
        }
        match self.result.opaque_ref::<Error>() {
            Some(err) if self.result.has_type(&obj_type::EXCEPTION) => Err(err),
            _ => Err(Rc::new(Error::Script(self.result.as_str().to_string()))),
        }
    }
}
