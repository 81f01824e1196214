//! Cancellation: a fired signal settles the call as Cancelled, cooperatively.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use mediated_rust::{
    CancellationToken, DispatchContext, DispatchError, ErasedResponse, Mediator, Middleware, Next,
};

use crate::support::{counter, trace, CreateUser, CreateUserHandler, Recorder, SlowQuery};

#[test]
fn pre_cancelled_dispatch_settles_without_running_anything() {
    let calls = counter();
    let trace = trace();
    let mediator = Mediator::builder()
        .middleware(Recorder::new("outer", Arc::clone(&trace)))
        .register::<CreateUser, _>(CreateUserHandler::new(Arc::clone(&calls)))
        .unwrap()
        .build();

    let token = CancellationToken::new();
    token.cancel();

    let err = mediator
        .send_with(
            CreateUser {
                name: "Ada".to_string(),
            },
            token,
        )
        .unwrap_err();

    assert!(matches!(err, DispatchError::Cancelled));
    assert!(trace.lock().unwrap().is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn cancellation_mid_pipeline_prevents_the_handler_and_skips_after_stages() {
    struct CancelInBefore;

    impl Middleware for CancelInBefore {
        fn handle(
            &self,
            ctx: &DispatchContext,
            next: Next<'_>,
        ) -> Result<ErasedResponse, DispatchError> {
            ctx.cancellation().cancel();
            next.invoke()
        }
    }

    let calls = counter();
    let trace = trace();
    let mediator = Mediator::builder()
        .middleware(Recorder::new("outer", Arc::clone(&trace)))
        .middleware(CancelInBefore)
        .register::<CreateUser, _>(CreateUserHandler::new(Arc::clone(&calls)))
        .unwrap()
        .build();

    let err = mediator
        .send(CreateUser {
            name: "Ada".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, DispatchError::Cancelled));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    // The outer stage entered, but its after half never ran.
    let got = trace.lock().unwrap().clone();
    assert_eq!(got, ["outer-before"]);
}

#[test]
fn handler_observes_the_signal_cooperatively() {
    let mediator = Mediator::builder()
        .register::<SlowQuery, _>(
            |_request: SlowQuery, ctx: &DispatchContext| -> Result<u64, DispatchError> {
                while !ctx.is_cancelled() {
                    thread::sleep(Duration::from_millis(1));
                }
                ctx.ensure_active()?;
                Ok(0)
            },
        )
        .unwrap()
        .build();

    let token = CancellationToken::new();
    let remote = token.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(20));
        remote.cancel();
    });

    let err = mediator.send_with(SlowQuery, token).unwrap_err();
    canceller.join().unwrap();

    assert!(matches!(err, DispatchError::Cancelled));
}

#[test]
fn uncancelled_dispatch_completes_normally() {
    let mediator = Mediator::builder()
        .register::<SlowQuery, _>(
            |_request: SlowQuery, ctx: &DispatchContext| -> Result<u64, DispatchError> {
                ctx.ensure_active()?;
                Ok(7)
            },
        )
        .unwrap()
        .build();

    let token = CancellationToken::new();
    assert_eq!(mediator.send_with(SlowQuery, token).unwrap(), 7);
}
