///
/// Lens
///
/// A paired getter/setter for one member of a case type. The setter returns
/// an updated whole rather than mutating; generated setters are defined
/// through the case's copy-update. Plain function pointers keep lenses
/// `Copy` and usable as statically accessible values, so external optics
/// libraries can wrap them.
///

pub struct Lens<W, A> {
    get: fn(&W) -> A,
    set: fn(A, W) -> W,
}

impl<W, A> Lens<W, A> {
    #[must_use]
    pub const fn new(get: fn(&W) -> A, set: fn(A, W) -> W) -> Self {
        Self { get, set }
    }

    pub fn get(&self, whole: &W) -> A {
        (self.get)(whole)
    }

    #[must_use]
    pub fn set(&self, value: A, whole: W) -> W {
        (self.set)(value, whole)
    }

    /// Read, transform, write back.
    #[must_use]
    pub fn modify<F: FnOnce(A) -> A>(&self, whole: W, f: F) -> W {
        let value = self.get(&whole);
        self.set(f(value), whole)
    }
}

impl<W, A> Clone for Lens<W, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W, A> Copy for Lens<W, A> {}

///
/// TESTS
///
