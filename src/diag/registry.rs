//! Name resolver registry
//!
//! The kernel reaches the error hook through a fixed symbol, so the
//! resolver it needs is installed once at startup and looked up from there.

use core::cell::Cell;

use critical_section::Mutex;

use crate::code::ObjectId;
use crate::error::{DiagError, DiagResult};
use crate::sink::{NameResolver, NoNames};

type ResolverRef = &'static (dyn NameResolver + Sync);

static RESOLVER: Mutex<Cell<Option<ResolverRef>>> = Mutex::new(Cell::new(None));

/// Install the resolver used by the kernel error hook.
///
/// Only the first install takes effect.
pub fn install_resolver(resolver: ResolverRef) -> DiagResult<()> {
    critical_section::with(|cs| {
        let slot = RESOLVER.borrow(cs);
        if slot.get().is_some() {
            crate::warn!("name resolver already installed");
            return Err(DiagError::AlreadyInstalled);
        }
        slot.set(Some(resolver));
        crate::debug!("name resolver installed");
        Ok(())
    })
}

/// Whether a resolver has been installed
pub fn is_installed() -> bool {
    critical_section::with(|cs| RESOLVER.borrow(cs).get().is_some())
}

/// Resolver that forwards to whatever is installed, or resolves nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct InstalledResolver;

impl InstalledResolver {
    fn current() -> ResolverRef {
        critical_section::with(|cs| RESOLVER.borrow(cs).get()).unwrap_or(&NoNames)
    }
}

impl NameResolver for InstalledResolver {
    fn thread_name(&self, thread: ObjectId) -> Option<&str> {
        Self::current().thread_name(thread)
    }

    fn timer_name(&self, timer: ObjectId) -> Option<&str> {
        Self::current().timer_name(timer)
    }
}
