//! CLI command implementations.

pub mod config;
pub mod run;
pub mod version;

#[cfg(test)]
pub(crate) mod test_support {
    use std::io::{self, Write};

    /// A stdout whose reader has gone away.
    pub struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }
}
