//! Loadable groups of commands.

use crate::dispatch::panic_message;
use crate::error::Error;
use crate::interp::Interp;
use log::{debug, warn};
use std::error::Error as StdError;
use std::panic::{catch_unwind, AssertUnwindSafe};

pub type InitFn = fn(&mut Interp) -> Result<(), Box<dyn StdError + Send + Sync>>;

/// A named, versioned registration entry point.
#[derive(Clone, Copy)]
pub struct Package {
    pub name: &'static str,
    pub version: &'static str,
    pub init: InitFn,
}

impl std::fmt::Debug for Package {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Package")
            .field("name", &self.name)
            .field("version", &self.version)
            .finish()
    }
}

impl Package {
    pub const fn new(name: &'static str, version: &'static str, init: InitFn) -> Self {
        Package { name, version, init }
    }
}

/// Declare a package static.
///
/// ```ignore
/// bind::package!(pub CALC = "calc", "1.0", register);
/// ```
#[macro_export]
macro_rules! package {
    ($vis:vis $ident:ident = $name:literal, $version:literal, $init:path) => {
        $vis static $ident: $crate::Package = $crate::Package::new($name, $version, $init);
    };
}

impl Interp {
    /// Run a package's entry point.
    ///
    /// Loading an already loaded package does nothing. If the entry point
    /// fails or panics, the command and class tables go back to what they
    /// were before it ran and the failure comes back as
    /// [`Error::Registration`].
    pub fn load_package(&mut self, package: &Package) -> Result<(), Error> {
        if self.provided(package.name).is_some() {
            debug!("package {} already loaded", package.name);
            return Ok(());
        }

        let saved = self.registrations();
        let outcome = catch_unwind(AssertUnwindSafe(|| (package.init)(self)));
        let source = match outcome {
            Ok(Ok(())) => {
                self.provide(package.name, package.version);
                debug!("package {} {} loaded", package.name, package.version);
                return Ok(());
            }
            Ok(Err(err)) => err,
            Err(payload) => panic_message(payload).into(),
        };

        self.restore(saved);
        warn!("package {} failed to load: {}", package.name, source);
        Err(Error::Registration {
            package: package.name.to_string(),
            source,
        })
    }

    /// Load a package and report failure through the result slot, the way
    /// a host loader sees it.
    pub fn require(&mut self, package: &Package) -> crate::Code {
        match self.load_package(package) {
            Ok(()) => {
                self.set_result(memory::Value::string(package.version));
                crate::Code::Ok
            }
            Err(err) => {
                self.set_error(err);
                crate::Code::Error
            }
        }
    }
}
