//! Shared library context with scoped activation.
//!
//! The library exposes a single implicit "current context" slot. Every entry
//! point that touches library state binds its [`ContextHandle`] for the
//! duration of the call through a [`ScopedContext`] guard, which restores the
//! previously bound context when dropped (including on early return).

use std::cell::{Cell, RefCell, RefMut};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::io::Io;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    /// The context currently bound on this thread.
    static CURRENT: Cell<Option<ContextId>> = const { Cell::new(None) };
}

/// Identity of a library context instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContextId(u64);

/// Per-instance library state.
#[derive(Debug, Default)]
pub struct ContextState {
    /// Input queue and want flags.
    pub io: Io,
    /// Frames whose draw output was captured from this context.
    pub frame_count: u64,
}

struct ContextInner {
    id: ContextId,
    state: RefCell<ContextState>,
}

/// Reference-counted handle to one library context.
///
/// Cloning the handle shares the context; it lives as long as its longest holder.
#[derive(Clone)]
pub struct ContextHandle {
    inner: Rc<ContextInner>,
}

impl std::fmt::Debug for ContextHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContextHandle")
            .field("id", &self.inner.id)
            .field("holders", &Rc::strong_count(&self.inner))
            .finish()
    }
}

impl Default for ContextHandle {
    fn default() -> Self {
        Self::create()
    }
}

impl ContextHandle {
    /// Creates a fresh library context.
    pub fn create() -> Self {
        let id = ContextId(NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed));
        log::debug!("created library context {id:?}");
        Self {
            inner: Rc::new(ContextInner {
                id,
                state: RefCell::new(ContextState::default()),
            }),
        }
    }

    /// Returns this context's identity.
    pub fn id(&self) -> ContextId {
        self.inner.id
    }

    /// Returns true if both handles refer to the same context.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Number of handles currently sharing this context.
    pub fn holder_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }

    /// Binds this context as current until the returned guard is dropped.
    pub fn activate(&self) -> ScopedContext<'_> {
        let previous = CURRENT.with(|current| current.replace(Some(self.inner.id)));
        ScopedContext {
            handle: self,
            previous,
        }
    }

    /// Runs `f` against this context's I/O block with the context bound.
    pub fn with_io<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Io) -> R,
    {
        let scope = self.activate();
        let mut io = scope.io_mut();
        f(&mut *io)
    }

    /// Runs `f` against the full context state with the context bound.
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ContextState) -> R,
    {
        let scope = self.activate();
        let mut state = scope.state_mut();
        f(&mut *state)
    }
}

/// Guard binding a context as current; restores the previous binding on drop.
#[must_use = "the context is unbound as soon as the guard is dropped"]
pub struct ScopedContext<'a> {
    handle: &'a ContextHandle,
    previous: Option<ContextId>,
}

impl ScopedContext<'_> {
    /// Borrows the bound context's I/O block.
    pub fn io_mut(&self) -> RefMut<'_, Io> {
        RefMut::map(self.handle.inner.state.borrow_mut(), |state| &mut state.io)
    }

    /// Borrows the bound context's state.
    pub fn state_mut(&self) -> RefMut<'_, ContextState> {
        self.handle.inner.state.borrow_mut()
    }
}

impl Drop for ScopedContext<'_> {
    fn drop(&mut self) {
        CURRENT.with(|current| current.set(self.previous));
    }
}

/// Returns the context bound on this thread, if any.
pub fn current_context_id() -> Option<ContextId> {
    CURRENT.with(Cell::get)
}
