use crate::error::BatchError;

/// Produces items one at a time until exhausted.
pub trait ItemReader<R> {
    fn read(&self) -> Option<Result<R, BatchError>>;
}

/// Emits a whole batch of items to some output.
pub trait ItemWriter<W> {
    fn write(&self, items: &[W]) -> Result<(), BatchError>;
    fn flush(&self) -> Result<(), BatchError>;
    fn open(&self) -> Result<(), BatchError> {
        Ok(())
    }
    fn close(&self) -> Result<(), BatchError> {
        Ok(())
    }
}
