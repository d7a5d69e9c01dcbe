/// Control actions supported by the optimization solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the most recent point.
    StopEarly,
}
