//! Cancellation and ordering behaviour under a real runtime.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use asynceither::{catch, AsyncCatching, Either, Fault};
use tokio::sync::oneshot;

#[tokio::test]
async fn aborted_catch_is_cancelled_not_left() {
    let (started_tx, started_rx) = oneshot::channel();
    let handle = tokio::spawn(catch(move || async move {
        started_tx.send(()).ok();
        std::future::pending::<u32>().await
    }));

    started_rx.await.expect("task must start");
    handle.abort();

    let error = handle.await.expect_err("an aborted task must not yield an Either");
    assert!(error.is_cancelled());
}

#[tokio::test]
async fn timeout_drops_catch_without_producing_left() {
    let outcome = tokio::time::timeout(
        Duration::from_millis(10),
        catch(|| std::future::pending::<u32>()),
    )
    .await;

    assert!(outcome.is_err());
}

#[tokio::test]
async fn aborted_recover_catching_is_cancelled() {
    let (started_tx, started_rx) = oneshot::channel();
    let failed: AsyncCatching<u32> = Either::Left(Fault::from("first"));
    let handle = tokio::spawn(failed.recover_catching(move |_| async move {
        started_tx.send(()).ok();
        std::future::pending::<u32>().await
    }));

    started_rx.await.expect("recovery must start");
    handle.abort();

    assert!(handle.await.expect_err("must be cancelled").is_cancelled());
}

#[tokio::test]
async fn panics_in_spawned_catch_become_left() {
    let handle = tokio::spawn(catch(|| async {
        tokio::task::yield_now().await;
        panic!("inside task");
    }));

    let result: AsyncCatching<()> = handle.await.expect("catch must not let the panic escape");
    assert!(matches!(result, Either::Left(Fault::Panic(ref m)) if m == "inside task"));
}

#[tokio::test]
async fn cancelled_chain_runs_no_later_step() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let chain = {
        let log = Arc::clone(&log);
        async move {
            let start: AsyncCatching<u32> = Either::Right(1);
            start
                .map_catching(|v| async move {
                    tokio::time::sleep(Duration::from_secs(60)).await;
                    v
                })
                .await
                .on_success(move |v| {
                    log.lock().expect("log lock").push(*v);
                    async {}
                })
                .await
        }
    };

    tokio::select! {
        _ = chain => panic!("the chain must not finish first"),
        _ = tokio::time::sleep(Duration::from_millis(10)) => {}
    }

    assert!(log.lock().expect("log lock").is_empty());
}

#[tokio::test]
async fn chain_steps_run_in_call_order() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let record = |step: &'static str| {
        let log = Arc::clone(&log);
        move || log.lock().expect("log lock").push(step)
    };

    let first = record("map");
    let second = record("flat_map");
    let third = record("on_right");

    let start: Either<String, u32> = Either::Right(2);
    let result = start
        .map(|v| async move {
            tokio::task::yield_now().await;
            first();
            v * 3
        })
        .await
        .flat_map(|v| async move {
            tokio::time::sleep(Duration::from_millis(1)).await;
            second();
            Either::Right(v + 1)
        })
        .await
        .on_right(|_| {
            third();
            async {}
        })
        .await;

    assert_eq!(result, Either::Right(7));
    assert_eq!(*log.lock().expect("log lock"), vec!["map", "flat_map", "on_right"]);
}
