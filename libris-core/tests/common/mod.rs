//! Shared helpers for integration tests

use std::path::{Path, PathBuf};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests (only once per test run)
#[allow(dead_code)]
pub fn init_test_logging() {
    INIT.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_target(true)
                    .with_level(true),
            )
            .with(tracing_subscriber::filter::EnvFilter::from_default_env())
            .try_init();
    });
}

/// Sample data in the default format, header included
#[allow(dead_code)]
pub const SAMPLE_BOOKS: &str = "\
title,authors,average_rating,isbn,num_pages
1984,George Orwell,4.17,451524934,328
Animal Farm,George Orwell,3.93,452284244,122
Brave New World,Aldous Huxley,3.98,60929871,288
Good Omens,Terry Pratchett-Neil Gaiman,4.25,60853980,491
Dune,Frank Herbert,4.22,441013597,604
";

/// Write `content` to `dir/name` and return the path
#[allow(dead_code)]
pub fn write_data_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}
