//! The low-level capability contract and two self-announcing implementations.

use tracing::trace;

use crate::sink::{Console, Sink};

/// Identifying token carried by every capability.
pub type Token = u32;

/// Abstraction shared by the high-level [`Demo`](crate::Demo) host and the
/// low-level parts it is bound to.
///
/// Purely behavioral. Construction is the host's requirement: `Demo` asks
/// for `Capability + Default` and builds its one instance with `C::default()`.
pub trait Capability {
    fn set_token(&mut self, id: Token);

    fn get_token(&self) -> Token;

    /// Reports the implementation label and current token to `sink`.
    fn announce_to(&self, sink: &mut dyn Sink);

    /// Reports to a default [`Console`].
    fn announce(&self) {
        self.announce_to(&mut Console::default());
    }
}

// ============================================================================
// First
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct First {
    id: Token,
}

impl Capability for First {
    fn set_token(&mut self, id: Token) {
        trace!(from = self.id, to = id, "First token changed");
        self.id = id;
    }

    fn get_token(&self) -> Token {
        self.id
    }

    fn announce_to(&self, sink: &mut dyn Sink) {
        sink.emit(&format!("First here with id = {}", self.id));
    }
}

// ============================================================================
// Second
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Second {
    id: Token,
}

impl Capability for Second {
    fn set_token(&mut self, id: Token) {
        trace!(from = self.id, to = id, "Second token changed");
        self.id = id;
    }

    fn get_token(&self) -> Token {
        self.id
    }

    fn announce_to(&self, sink: &mut dyn Sink) {
        sink.emit(&format!("Second here with id = {}", self.id));
    }
}
