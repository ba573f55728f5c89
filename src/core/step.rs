use std::{
    cell::Cell,
    time::{Duration, Instant},
};

use log::{debug, error};

use crate::BatchError;

use super::item::{ItemReader, ItemWriter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepStatus {
    ERROR,
    SUCCESS,
    STARTED,
}

pub struct StepResult {
    pub start: Instant,
    pub end: Instant,
    pub duration: Duration,
    pub status: StepStatus,
    pub read_count: usize,
    pub write_count: usize,
}

/// Drains `reader` into an ordered batch.
///
/// The batch is all-or-nothing: the first failing read is returned wrapped in
/// [`BatchError::Generation`] and everything read so far is dropped. An empty
/// reader yields an empty batch.
pub fn read_batch<R, I>(reader: &I) -> Result<Vec<R>, BatchError>
where
    I: ItemReader<R> + ?Sized,
{
    let mut items = Vec::new();

    while let Some(result) = reader.read() {
        match result {
            Ok(item) => items.push(item),
            Err(err) => {
                error!("Error occured during read item: {}", err);
                return Err(BatchError::Generation(Box::new(err)));
            }
        }
    }

    Ok(items)
}

/// Reads a full batch from a reader and hands it to a writer in one go.
pub struct Step<'a, R> {
    reader: &'a dyn ItemReader<R>,
    writer: &'a dyn ItemWriter<R>,
    status: Cell<StepStatus>,
    read_count: Cell<usize>,
    write_count: Cell<usize>,
}

impl<'a, R> Step<'a, R> {
    pub fn execute(&self) -> Result<StepResult, BatchError> {
        let start = Instant::now();

        debug!("Start of step");
        self.status.set(StepStatus::STARTED);

        if let Err(err) = self._run() {
            self.status.set(StepStatus::ERROR);
            error!("Step failed: {}", err);
            return Err(err);
        }
        self.status.set(StepStatus::SUCCESS);

        debug!("End of step");

        Ok(StepResult {
            start,
            end: Instant::now(),
            duration: start.elapsed(),
            status: StepStatus::SUCCESS,
            read_count: self.read_count.get(),
            write_count: self.write_count.get(),
        })
    }

    fn _run(&self) -> Result<(), BatchError> {
        debug!("Start reading batch");
        let items = read_batch(self.reader)?;
        self.read_count.set(items.len());
        debug!("End reading batch: {} items", items.len());

        debug!("Start writting batch");
        self.writer.open()?;
        self.writer.write(&items)?;
        self.writer.flush()?;
        self.writer.close()?;
        self.write_count.set(items.len());
        debug!("End writting batch");

        Ok(())
    }

    pub fn get_status(&self) -> StepStatus {
        self.status.get()
    }

    pub fn get_read_count(&self) -> usize {
        self.read_count.get()
    }

    pub fn get_write_count(&self) -> usize {
        self.write_count.get()
    }
}

#[derive(Default)]
pub struct StepBuilder<'a, R> {
    reader: Option<&'a dyn ItemReader<R>>,
    writer: Option<&'a dyn ItemWriter<R>>,
}

impl<'a, R> StepBuilder<'a, R> {
    pub fn new() -> StepBuilder<'a, R> {
        Self {
            reader: None,
            writer: None,
        }
    }

    pub fn reader(mut self, reader: &'a impl ItemReader<R>) -> StepBuilder<'a, R> {
        self.reader = Some(reader);
        self
    }

    pub fn writer(mut self, writer: &'a impl ItemWriter<R>) -> StepBuilder<'a, R> {
        self.writer = Some(writer);
        self
    }

    pub fn build(self) -> Step<'a, R> {
        Step {
            reader: self.reader.expect("a step needs a reader"),
            writer: self.writer.expect("a step needs a writer"),
            status: Cell::new(StepStatus::STARTED),
            read_count: Cell::new(0),
            write_count: Cell::new(0),
        }
    }
}
