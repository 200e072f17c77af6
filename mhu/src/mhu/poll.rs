use spin::relax::RelaxStrategy;

/// Spins until `done` returns true, calling `R::relax()` between attempts.
///
/// There is no timeout. The relax strategy changes how the wait burns cycles,
/// never whether it ends.
#[inline]
pub fn poll_until<R: RelaxStrategy>(mut done: impl FnMut() -> bool) {
    while !done() {
        R::relax();
    }
}
