//! A simple blacklist example.
//!
//! In this example, there are two threads:
//! -   A Producer thread will intermittently add new black-listed IDs to the SyncSet, and lift older ones.
//! -   A Consumer thread will "model" a continuous stream of messages coming and for each check their sender against
//!     the black-list.
//!
//! There could be more Consumer threads; for clarity there isn't.

extern crate crossbeam_utils;
extern crate twinset;

use std::{thread, time};

use tracing::{info, Level};

use twinset::syncset::{SyncSet, SyncSetReader};

const NUMBER_ELEMENTS_PER_BATCH: usize = 10;
const NUMBER_BATCHES: usize = 10;

const PACE_TIME: time::Duration = time::Duration::from_millis(100);

//  Mixed-types look-up!
fn is_blacklisted(id: &str, reader: &SyncSetReader<'_, String>) -> bool {
    reader.contains(id)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(std::io::stderr)
        .init();

    let blacklist: SyncSet<String> = SyncSet::new();
    let reader = blacklist.reader();

    crossbeam_utils::thread::scope(|scope| {
        //
        //  Consumer
        //
        scope.spawn(move |_| {
            thread::sleep(PACE_TIME);

            let mut blacklisted = 0;

            for _ in 0..NUMBER_BATCHES {
                //  Simulate continuous stream of messages
                for i in 0..NUMBER_BATCHES {
                    for j in 0..NUMBER_ELEMENTS_PER_BATCH {
                        let id = i * NUMBER_ELEMENTS_PER_BATCH + j;
                        let id = format!("{}", id);

                        if is_blacklisted(&id, &reader) {
                            info!(%id, "consumer: black-listed");
                            blacklisted += 1;
                        }
                    }
                }

                thread::sleep(PACE_TIME);
            }

            let mut remaining = reader.to_vec();
            remaining.sort();

            println!("Consumer - {} messages black-listed, remaining {:?}", blacklisted, remaining);

            assert!(blacklisted >= NUMBER_BATCHES);
        });

        //
        //  Producer
        //
        for i in 0..NUMBER_BATCHES {
            for j in 0..NUMBER_ELEMENTS_PER_BATCH {
                let id = i * NUMBER_ELEMENTS_PER_BATCH + j;

                //  "Randomly" blacklist a few elements
                if id * 13 % NUMBER_ELEMENTS_PER_BATCH == 0 {
                    blacklist.insert(format!("{}", id));

                    info!(id, "producer: black-listing");
                }
            }

            //  Lift the black-listing of the batch before the previous one.
            if i > 1 {
                let previous = (i - 2) * NUMBER_ELEMENTS_PER_BATCH;
                blacklist.remove(&format!("{}", previous));

                info!(id = previous, "producer: lifting");
            }

            thread::sleep(PACE_TIME);
        }
    })
    .unwrap();
}
