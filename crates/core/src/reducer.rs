//! Reducer trait for immutable view state.

/// Pure state transition.
///
/// - **Decision + evolution**: `reduce(&self, action)` returns the next state.
///
/// The current value is never mutated; callers replace their state with the
/// returned one. Implementations must not perform IO or side effects.
pub trait Reducer: Clone + core::fmt::Debug {
    type Action: Clone + core::fmt::Debug;

    fn reduce(&self, action: &Self::Action) -> Self;

    /// Fold a sequence of actions, left to right.
    fn reduce_all<'a, I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self::Action: 'a,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(i64);

    #[derive(Debug, Clone)]
    enum Step {
        Add(i64),
        Reset,
    }

    impl Reducer for Counter {
        type Action = Step;

        fn reduce(&self, action: &Step) -> Self {
            match action {
                Step::Add(n) => Counter(self.0 + n),
                Step::Reset => Counter(0),
            }
        }
    }

    #[test]
    fn reduce_all_folds_in_order() {
        let start = Counter(5);
        let end = start.reduce_all(&[Step::Add(2), Step::Reset, Step::Add(3)]);
        assert_eq!(end, Counter(3));
        assert_eq!(start, Counter(5));
    }
}
