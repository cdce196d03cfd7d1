//! Periodic tick source

/// Timer that fires the scan tick
pub trait TickTimer {
    /// Load the timer for the next period
    ///
    /// Called first thing in every tick so the period does not drift by the
    /// handler's own execution time.
    fn rearm(&mut self);
}
