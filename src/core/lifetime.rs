use std::cell::Cell;
use std::rc::Rc;

/// Shared liveness flag for a view. Clones observe the same flag.
#[derive(Clone, Debug)]
pub struct ViewLifetime {
    alive: Rc<Cell<bool>>,
}

impl ViewLifetime {
    pub fn new() -> Self {
        Self {
            alive: Rc::new(Cell::new(true)),
        }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive.get()
    }

    pub fn dispose(&self) {
        self.alive.set(false);
    }

    /// Run `f` only while the view is alive.
    pub fn guard<T>(&self, f: impl FnOnce() -> T) -> Option<T> {
        self.is_alive().then(f)
    }
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}
