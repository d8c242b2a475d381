use std::fs::File;
use std::io::{self, Write};

use log;
use log::{LogLevel, LogLevelFilter, LogMetadata, LogRecord, SetLoggerError};

#[derive(Debug)]
pub enum LoggerError {
    Io(io::Error),
    SetLogger(SetLoggerError)
}

impl From<io::Error> for LoggerError {
    fn from(err: io::Error) -> LoggerError {
        LoggerError::Io(err)
    }
}

impl From<SetLoggerError> for LoggerError {
    fn from(err: SetLoggerError) -> LoggerError {
        LoggerError::SetLogger(err)
    }
}

enum Sink {
    Console,
    File(File)
}

struct SimpleLogger {
    sink: Sink
}

impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &LogMetadata) -> bool {
        metadata.level() <= LogLevel::Debug
    }

    fn log(&self, record: &LogRecord) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match self.sink {
            Sink::Console => {
                println!("{} - {}", record.level(), record.args());
            }
            Sink::File(ref handle) => {
                let mut handle: &File = handle;
                if let Err(err) = write!(handle, "{} - {}\n", record.level(), record.args()) {
                    println!("Failed to write to log file: {}", err);
                }
            }
        }
    }
}

/// Installs the process-wide logger, writing either to the console or to
/// a freshly created file. May only succeed once per process.
pub fn init_logger(level: LogLevelFilter, log_path: Option<String>) -> Result<(), LoggerError> {
    let sink = match log_path {
        Some(ref path) => Sink::File(File::create(path)?),
        None => Sink::Console
    };

    Ok(log::set_logger(move |max_level| {
        max_level.set(level);
        Box::new(SimpleLogger { sink: sink }) as Box<log::Log>
    })?)
}
