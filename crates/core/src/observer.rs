/// Receives integrator events and decides whether the run should continue.
///
/// Observers let callers narrate, record, or cut short an integration without
/// changing the integrator's API. The returned `Option<A>` is a solver-specific
/// action; `None` lets the integrator carry on.
///
/// Closures implement `Observer` automatically, and `()` is a no-op observer
/// that never returns an action.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
