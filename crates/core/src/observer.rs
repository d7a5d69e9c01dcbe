/// Receives an event after each solver step and may redirect the run.
///
/// Solvers never log or print. Anything a caller wants to know about a run in
/// progress (the point reached, the function value, the step taken) arrives
/// through an observer, which can also end the run early.
///
/// `observe` returns `Some(action)` to request a solver-specific action, or
/// `None` to let the iteration continue.
///
/// Closures implement `Observer`, and `()` is a no-op observer.
pub trait Observer<E, A> {
    /// Handles one event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
