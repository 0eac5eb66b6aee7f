//! The high-level host, bound to a capability at compile time.

use std::any::type_name;

use tracing::debug;

use crate::capability::{Capability, Token};
use crate::sink::{Console, Sink};

/// High-level component that owns exactly one `C` and forwards to it.
///
/// The bound type is picked at the call site, never at run time:
///
/// ```
/// use dep_inversion::{Demo, First, Transcript};
///
/// let mut demo = Demo::<First>::new();
/// demo.set_token(1);
///
/// let mut out = Transcript::new();
/// demo.say_it_to(&mut out);
/// assert_eq!(out.lines(), ["Demo with id 1 here", "First here with id = 1"]);
/// ```
///
/// A type that does not implement [`Capability`] cannot be bound:
///
/// ```compile_fail
/// use dep_inversion::Demo;
///
/// let demo = Demo::<u32>::new();
/// ```
///
/// Nor can a capability the host has no way to construct:
///
/// ```compile_fail
/// use dep_inversion::{Capability, Demo, Sink, Token};
///
/// struct Fixed(Token);
///
/// impl Capability for Fixed {
///     fn set_token(&mut self, id: Token) {
///         self.0 = id;
///     }
///     fn get_token(&self) -> Token {
///         self.0
///     }
///     fn announce_to(&self, sink: &mut dyn Sink) {
///         sink.emit("Fixed");
///     }
/// }
///
/// let demo = Demo::<Fixed>::new();
/// ```
#[derive(Debug, Clone)]
pub struct Demo<C: Capability> {
    my_say: C,
}

impl<C: Capability + Default> Demo<C> {
    pub fn new() -> Self {
        debug!(capability = type_name::<C>(), "binding demo host");
        Self {
            my_say: C::default(),
        }
    }
}

impl<C: Capability> Demo<C> {
    pub fn set_token(&mut self, id: Token) {
        self.my_say.set_token(id);
    }

    pub fn get_token(&self) -> Token {
        self.my_say.get_token()
    }

    /// Host report first, then the capability's own report.
    pub fn say_it_to(&self, sink: &mut dyn Sink) {
        sink.emit(&format!("Demo with id {} here", self.get_token()));
        self.my_say.announce_to(sink);
    }

    pub fn say_it(&self) {
        self.say_it_to(&mut Console::default());
    }
}

impl<C: Capability + Default> Default for Demo<C> {
    fn default() -> Self {
        Self::new()
    }
}
