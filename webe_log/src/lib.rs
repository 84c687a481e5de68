extern crate chrono;
extern crate log;

use chrono::prelude::*;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{self, Write};
use std::sync::Mutex;

// backend for the `log` facade. libraries log through log::trace! etc,
// binaries build one of these and install it with init()
pub struct WebeLogger {
  level: LevelFilter,
  sinks: Mutex<Vec<Box<dyn Sink>>>,
}

impl WebeLogger {
  pub fn new(level: LevelFilter) -> WebeLogger {
    WebeLogger {
      level: level,
      sinks: Mutex::new(Vec::new()),
    }
  }

  pub fn add_sink(&mut self, sink: Box<dyn 'static + Sink>) {
    match self.sinks.get_mut() {
      Ok(sinks) => sinks.push(sink),
      Err(poisoned) => poisoned.into_inner().push(sink),
    }
  }

  pub fn level(&self) -> LevelFilter {
    self.level
  }

  // can only succeed once per process
  pub fn init(self) -> Result<(), SetLoggerError> {
    let level = self.level;
    log::set_boxed_logger(Box::new(self))?;
    log::set_max_level(level);
    Ok(())
  }
}

impl Log for WebeLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= self.level
  }

  fn log(&self, record: &Record) {
    if !self.enabled(record.metadata()) {
      return;
    }
    let msg = format!("{}: {}", record.target(), record.args());
    match self.sinks.lock() {
      Ok(mut sinks) => {
        for sink in sinks.iter_mut() {
          sink.write(record.level(), &msg);
        }
      }
      // a sink panicked while writing. drop the record rather than panic in the caller
      Err(_lock_err) => {}
    }
  }

  fn flush(&self) {
    if let Ok(mut sinks) = self.sinks.lock() {
      for sink in sinks.iter_mut() {
        sink.flush();
      }
    }
  }
}

pub trait Sink: Send {
  fn write(&mut self, level: Level, msg: &str);
  fn flush(&mut self) {}
}

pub fn format_line(level: Level, msg: &str) -> String {
  format!("[{}] - [{}] {}", Local::now(), level, msg)
}

pub struct ConsoleLogger<W: Write + Send> {
  writer: W,
}

impl ConsoleLogger<io::Stdout> {
  pub fn new() -> ConsoleLogger<io::Stdout> {
    ConsoleLogger { writer: io::stdout() }
  }
}

impl<W: Write + Send> ConsoleLogger<W> {
  pub fn with_writer(writer: W) -> ConsoleLogger<W> {
    ConsoleLogger { writer: writer }
  }
}

impl<W: Write + Send> Sink for ConsoleLogger<W> {
  fn write(&mut self, level: Level, msg: &str) {
    // nowhere to report a failed console write
    writeln!(self.writer, "{}", format_line(level, msg)).unwrap_or_default();
  }

  fn flush(&mut self) {
    self.writer.flush().unwrap_or_default();
  }
}
