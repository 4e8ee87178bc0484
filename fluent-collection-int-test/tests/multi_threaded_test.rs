use fluent_collection::common::{ReadExecutor, Record, WriteExecutor};
use fluent_collection::filter::field;
use fluent_collection::{record, Collection};
use fluent_collection_int_test::test_util::{coffees, run_test};
use std::sync::{Arc, Barrier};
use std::thread;

#[ctor::ctor]
fn init() {
    colog::init();
}

#[test]
fn test_multi_threaded_add() {
    let shared = Collection::<Record>::new().into_shared();

    let num_threads = 5;
    let adds_per_thread = 10;
    let barrier = Arc::new(Barrier::new(num_threads));

    let mut handles = vec![];
    for thread_id in 0..num_threads {
        let shared = shared.clone();
        let barrier = Arc::clone(&barrier);

        handles.push(thread::spawn(move || {
            barrier.wait();
            for i in 0..adds_per_thread {
                shared.write_with(|col| {
                    col.add(record! { thread: thread_id, seq: i });
                });
            }
        }));
    }
    for handle in handles {
        handle.join().unwrap();
    }

    shared.read_with(|col| {
        assert_eq!(col.count(), num_threads * adds_per_thread);
        let keys: Vec<u64> = col.keys().filter_map(|k| k.as_int()).collect();
        assert_eq!(keys, (0..50).collect::<Vec<u64>>());

        let per_thread = col.group_by("thread", false).unwrap();
        assert_eq!(per_thread.count(), num_threads);
        assert!(per_thread.values().all(|bucket| bucket.count() == adds_per_thread));
    });
}

#[test]
fn test_concurrent_readers() {
    run_test(coffees, |col| {
        let col = Arc::new(col);
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let col = Arc::clone(&col);
                thread::spawn(move || {
                    col.find(&field("ingredients").contains("Milk"))
                        .map(|found| found.count())
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap()?, 2);
        }
        Ok(())
    })
}

#[test]
fn test_readers_and_writer() {
    run_test(coffees, |col| {
        let shared = col.into_shared();
        let writer = {
            let shared = shared.clone();
            thread::spawn(move || {
                for i in 0..100 {
                    shared.write_with(|col| {
                        col.add(record! { name: (format!("Special {}", i)), cost: 3.0 });
                    });
                }
            })
        };

        let reader = {
            let shared = shared.clone();
            thread::spawn(move || {
                for _ in 0..100 {
                    let expensive = shared.read_with(|col| col.where_greater("cost", 9).map(|c| c.count()));
                    assert_eq!(expensive.unwrap(), 1);
                }
            })
        };

        writer.join().unwrap();
        reader.join().unwrap();

        assert_eq!(shared.read_with(|col| col.count()), 104);
        Ok(())
    })
}
