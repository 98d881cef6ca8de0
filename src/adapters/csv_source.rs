//! CSV file sample source.
//!
//! Implements [`SamplePort`] over any `BufRead`, one `<hr>,<spo2>` record
//! per line, no header.  Blank lines between records are skipped.  The
//! first line that does not parse as two integers (or is not valid UTF-8)
//! ends the stream, exactly like reaching end of file; the reason is only
//! logged at `debug`.  Genuine read failures also end it, at `warn`.
//!
//! The file handle is owned by the adapter and closed when it is dropped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::app::ports::SamplePort;
use crate::error::{Error, Result};
use crate::sample::Sample;

pub struct CsvSampleSource<R> {
    lines: io::Lines<R>,
    line_no: u64,
    finished: bool,
}

impl CsvSampleSource<BufReader<File>> {
    /// Open `path` for reading.
    ///
    /// Fails with [`Error::SourceUnavailable`] when the file is missing,
    /// unreadable, or a directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let unavailable = |kind| Error::SourceUnavailable {
            path: path.to_path_buf(),
            kind,
        };

        let file = File::open(path).map_err(|e| unavailable(e.kind()))?;
        let meta = file.metadata().map_err(|e| unavailable(e.kind()))?;
        if meta.is_dir() {
            return Err(unavailable(io::ErrorKind::IsADirectory));
        }
        debug!("Opened sample source '{}'", path.display());
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> CsvSampleSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            finished: false,
        }
    }

    /// Number of lines consumed so far, blank lines included.
    pub fn lines_read(&self) -> u64 {
        self.line_no
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn finish(&mut self) -> Option<Sample> {
        self.finished = true;
        None
    }
}

impl<R: BufRead> SamplePort for CsvSampleSource<R> {
    fn next_sample(&mut self) -> Option<Sample> {
        if self.finished {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                // Undecodable bytes are a bad record, not a read failure.
                Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => {
                    debug!("Line {}: {} — ending stream", self.line_no + 1, e);
                    return self.finish();
                }
                Some(Err(e)) => {
                    warn!("Read error after line {}: {} — ending stream", self.line_no, e);
                    return self.finish();
                }
                None => return self.finish(),
            };
            self.line_no += 1;

            if line.trim().is_empty() {
                continue;
            }
            return match line.parse::<Sample>() {
                Ok(sample) => Some(sample),
                Err(e) => {
                    debug!("Line {}: {} — ending stream", self.line_no, e);
                    self.finish()
                }
            };
        }
    }
}
