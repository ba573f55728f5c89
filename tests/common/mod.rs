//! Test doubles shared by the integration tests.
#![allow(dead_code)]

use std::io::{self, Write};

use mockall::mock;

// Output sink whose behaviour each test scripts.
mock! {
    pub Sink {}
    impl Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}

/// A sink refusing every write, as a full disk would.
pub fn full_disk() -> MockSink {
    let mut sink = MockSink::new();
    sink.expect_write()
        .returning(|_| Err(io::Error::other("no space left on device")));
    sink.expect_flush().returning(|| Ok(()));
    sink
}

/// A sink accepting writes but failing to flush them.
pub fn failing_flush() -> MockSink {
    let mut sink = MockSink::new();
    sink.expect_write().returning(|buf| Ok(buf.len()));
    sink.expect_flush()
        .returning(|| Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed")));
    sink
}
