pub struct Store<S, A> {
    state: S,
    updater: fn(&mut S, &A) -> (),
    dispatched: usize,
}

impl<S, A> Store<S, A> {
    pub fn new(updater: fn(&mut S, &A) -> (), state: S) -> Self {
        Store {
            state,
            updater,
            dispatched: 0,
        }
    }

    pub fn dispatch(&mut self, action: &A) {
        (self.updater)(&mut self.state, action);
        self.dispatched += 1;
    }

    pub fn dispatch_all<'a, I>(&mut self, actions: I)
    where
        A: 'a,
        I: IntoIterator<Item = &'a A>,
    {
        for action in actions {
            self.dispatch(action);
        }
    }

    pub fn get_state(&self) -> &S {
        &self.state
    }

    /// Number of actions applied so far.
    pub fn dispatched(&self) -> usize {
        self.dispatched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(total: &mut i64, n: &i64) {
        *total += n;
    }

    #[test]
    fn dispatch_runs_updater() {
        let mut store = Store::<i64, i64>::new(add, 0);
        store.dispatch(&2);
        store.dispatch_all(&[3, 4]);
        assert_eq!(*store.get_state(), 9);
        assert_eq!(store.dispatched(), 3);
    }
}
