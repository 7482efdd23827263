//! Two-way binding between a consumer-owned value and the editor's working copy
//!
//! Reads reconcile with upstream first, so a consumer that replaces its value
//! is picked up on the next read. Writes update the local copy and then call
//! the write callback exactly once, synchronously.

type ReadFn<T> = Box<dyn Fn() -> Option<T>>;
type WriteFn<T> = Box<dyn FnMut(&T)>;

pub struct ModelBinder<T> {
    read: ReadFn<T>,
    write: WriteFn<T>,
    /// Last value observed from upstream, used to detect upstream changes
    upstream: Option<T>,
    local: Option<T>,
    writes: usize,
}

impl<T> ModelBinder<T>
where
    T: Clone + PartialEq,
{
    pub fn new(
        read: impl Fn() -> Option<T> + 'static,
        write: impl FnMut(&T) + 'static,
    ) -> Self {
        let upstream = read();
        Self {
            read: Box::new(read),
            write: Box::new(write),
            local: upstream.clone(),
            upstream,
            writes: 0,
        }
    }

    /// Current value, after picking up any upstream replacement.
    pub fn value(&mut self) -> Option<&T> {
        self.sync();
        self.local.as_ref()
    }

    /// Pull from upstream. Returns true if the local copy was replaced.
    pub fn sync(&mut self) -> bool {
        let current = (self.read)();
        if current == self.upstream {
            return false;
        }

        self.upstream = current.clone();
        if current == self.local {
            return false;
        }

        tracing::trace!("model binder picked up upstream change");
        self.local = current;
        true
    }

    /// Replace the local value and notify the owner.
    pub fn set(&mut self, value: T) {
        self.local = Some(value);
        self.writes += 1;
        tracing::trace!(writes = self.writes, "model binder write");
        if let Some(local) = &self.local {
            (self.write)(local);
        }
    }

    /// Number of writes pushed to the owner so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}
