//! Concurrent dispatch: the frozen mediator is shared without locking.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use mediated_rust::{DispatchContext, DispatchError, ErasedResponse, Mediator, Middleware, Next};

use crate::support::{counter, CreateUser, CreateUserHandler, UserId};

#[test]
fn concurrent_sends_are_independent() {
    let calls = counter();
    let mediator = Arc::new(
        Mediator::builder()
            .register::<CreateUser, _>(CreateUserHandler::new(Arc::clone(&calls)))
            .unwrap()
            .build(),
    );

    let mut handles = Vec::new();
    for t in 0..8 {
        let mediator = Arc::clone(&mediator);
        handles.push(thread::spawn(move || {
            for i in 0..50 {
                let id = mediator
                    .send(CreateUser {
                        name: format!("u{}-{}", t, i),
                    })
                    .unwrap();
                assert_eq!(id, UserId(format!("user-u{}-{}", t, i)));
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 8 * 50);
}

#[test]
fn every_concurrent_dispatch_passes_through_the_pipeline() {
    struct Counting {
        entered: Arc<AtomicUsize>,
        exited: Arc<AtomicUsize>,
    }

    impl Middleware for Counting {
        fn handle(
            &self,
            _ctx: &DispatchContext,
            next: Next<'_>,
        ) -> Result<ErasedResponse, DispatchError> {
            self.entered.fetch_add(1, Ordering::SeqCst);
            let response = next.invoke()?;
            self.exited.fetch_add(1, Ordering::SeqCst);
            Ok(response)
        }
    }

    let entered = counter();
    let exited = counter();
    let calls = counter();
    let mediator = Arc::new(
        Mediator::builder()
            .middleware(Counting {
                entered: Arc::clone(&entered),
                exited: Arc::clone(&exited),
            })
            .register::<CreateUser, _>(CreateUserHandler::new(Arc::clone(&calls)))
            .unwrap()
            .build(),
    );

    let mut handles = Vec::new();
    for t in 0..8 {
        let mediator = Arc::clone(&mediator);
        handles.push(thread::spawn(move || {
            for i in 0..25 {
                mediator
                    .send(CreateUser {
                        name: format!("u{}-{}", t, i),
                    })
                    .unwrap();
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(entered.load(Ordering::SeqCst), 200);
    assert_eq!(exited.load(Ordering::SeqCst), 200);
    assert_eq!(calls.load(Ordering::SeqCst), 200);
}
