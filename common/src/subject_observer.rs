use std::{error::Error, fmt, rc::Rc};

pub type UpdateResult = Result<(), Box<dyn Error>>;

pub trait Observer<S: Subject<E>, E: Clone> {
    fn name(&self) -> &str;

    fn update(&self, source: &S, event: E) -> UpdateResult;
}

pub type SharedObserver<S, E> = Rc<dyn Observer<S, E>>;

pub type SharedObservers<S, E> = Vec<SharedObserver<S, E>>;

/// A subject keeps its observers in registration order and notifies them in that order.
pub trait Subject<E: Clone>: Sized {
    /// Returns `false` when the very same observer is already registered.
    fn register_observer(&mut self, observer: SharedObserver<Self, E>) -> bool;

    /// Returns `false` when the observer was not registered.
    fn unregister_observer(&mut self, observer: &SharedObserver<Self, E>) -> bool;

    /// Failing observers are reported, they never interrupt the notification of the others.
    fn notify_observers(&self, event: E) -> Vec<NotificationFailure>;
}

#[derive(Debug)]
pub struct NotificationFailure {
    pub observer: String,
    pub error: Box<dyn Error>,
}

impl fmt::Display for NotificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to notify '{}': {}", self.observer, self.error)
    }
}

pub fn contains<S, E>(observers: &[SharedObserver<S, E>], observer: &SharedObserver<S, E>) -> bool
where
    S: Subject<E>,
    E: Clone,
{
    observers.iter().any(|obs| Rc::ptr_eq(obs, observer))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::{contains, NotificationFailure, Observer, SharedObserver, Subject, UpdateResult};

    #[derive(Default)]
    struct Counter {
        observers: Vec<SharedObserver<Self, u8>>,
    }

    impl Subject<u8> for Counter {
        fn register_observer(&mut self, observer: SharedObserver<Self, u8>) -> bool {
            if contains(&self.observers, &observer) {
                return false;
            }
            self.observers.push(observer);
            true
        }

        fn unregister_observer(&mut self, observer: &SharedObserver<Self, u8>) -> bool {
            let len = self.observers.len();
            self.observers.retain(|obs| !Rc::ptr_eq(obs, observer));
            len != self.observers.len()
        }

        fn notify_observers(&self, event: u8) -> Vec<NotificationFailure> {
            self.observers
                .iter()
                .filter_map(|obs| {
                    obs.update(self, event)
                        .err()
                        .map(|error| NotificationFailure {
                            observer: obs.name().to_string(),
                            error,
                        })
                })
                .collect()
        }
    }

    struct Recorder {
        seen: RefCell<Vec<u8>>,
    }

    impl Observer<Counter, u8> for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn update(&self, _source: &Counter, event: u8) -> UpdateResult {
            if event == 0 {
                return Err("zero is not accepted".into());
            }
            self.seen.borrow_mut().push(event);
            Ok(())
        }
    }

    #[test]
    fn test_contains_uses_reference_identity() {
        // Given
        let first: SharedObserver<Counter, u8> = Rc::new(Recorder {
            seen: RefCell::new(vec![]),
        });
        let second: SharedObserver<Counter, u8> = Rc::new(Recorder {
            seen: RefCell::new(vec![]),
        });
        let observers = vec![first.clone()];

        // Then
        assert!(contains(&observers, &first), "Should find the same reference");
        assert!(
            !contains(&observers, &second),
            "Should not match another observer with the same name"
        );
    }

    #[test]
    fn test_notification_failure_display() {
        // Given
        let mut counter = Counter::default();
        let recorder = Rc::new(Recorder {
            seen: RefCell::new(vec![]),
        });
        counter.register_observer(recorder.clone());

        // When
        let failures = counter.notify_observers(0);
        counter.notify_observers(4);

        // Then
        assert_eq!(1, failures.len());
        assert_eq!(
            "Failed to notify 'recorder': zero is not accepted",
            failures[0].to_string()
        );
        assert_eq!(vec![4], *recorder.seen.borrow());
        assert!(counter.unregister_observer(&(recorder as SharedObserver<Counter, u8>)));
    }
}
