use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use log::{Level, LevelFilter, Log, Record};
use webe_log::{ConsoleLogger, Sink, WebeLogger};

type Lines = Arc<Mutex<Vec<(Level, String)>>>;

struct MemorySink {
  lines: Lines,
}

impl Sink for MemorySink {
  fn write(&mut self, level: Level, msg: &str) {
    self.lines.lock().unwrap().push((level, msg.to_owned()));
  }
}

#[derive(Clone)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.lock().unwrap().write(buf)
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

fn memory_logger(level: LevelFilter) -> (WebeLogger, Lines) {
  let lines: Lines = Arc::new(Mutex::new(Vec::new()));
  let mut logger = WebeLogger::new(level);
  logger.add_sink(Box::new(MemorySink { lines: lines.clone() }));
  (logger, lines)
}

#[test]
fn filters_by_level() {
  let (logger, lines) = memory_logger(LevelFilter::Info);
  logger.log(&Record::builder().args(format_args!("hi mom")).level(Level::Info).target("webe").build());
  logger.log(&Record::builder().args(format_args!("too chatty")).level(Level::Debug).target("webe").build());
  logger.log(&Record::builder().args(format_args!("uh oh")).level(Level::Error).target("webe").build());

  let lines = lines.lock().unwrap();
  assert_eq!(
    *lines,
    vec![
      (Level::Info, "webe: hi mom".to_owned()),
      (Level::Error, "webe: uh oh".to_owned()),
    ]
  );
}

#[test]
fn off_logs_nothing() {
  let (logger, lines) = memory_logger(LevelFilter::Off);
  logger.log(&Record::builder().args(format_args!("hidden")).level(Level::Error).target("webe").build());
  assert!(lines.lock().unwrap().is_empty());
}

#[test]
fn fans_out_to_every_sink() {
  let (mut logger, first) = memory_logger(LevelFilter::Trace);
  let second: Lines = Arc::new(Mutex::new(Vec::new()));
  logger.add_sink(Box::new(MemorySink { lines: second.clone() }));

  logger.log(&Record::builder().args(format_args!("lookup miss")).level(Level::Trace).target("webe_status").build());

  assert_eq!(first.lock().unwrap().len(), 1);
  assert_eq!(*first.lock().unwrap(), *second.lock().unwrap());
}

#[test]
fn console_line_format() {
  let buffer = SharedBuffer(Arc::new(Mutex::new(Vec::new())));
  let mut logger = WebeLogger::new(LevelFilter::Warn);
  logger.add_sink(Box::new(ConsoleLogger::with_writer(buffer.clone())));

  logger.log(&Record::builder().args(format_args!("careful")).level(Level::Warn).target("example").build());
  logger.flush();

  let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
  assert!(written.starts_with('['));
  assert!(written.ends_with("] - [WARN] example: careful\n"), "{}", written);
  assert_eq!(written.lines().count(), 1);
}

#[test]
fn installs_as_global_logger() {
  let (logger, lines) = memory_logger(LevelFilter::Debug);
  logger.init().unwrap();

  log::debug!(target: "global", "installed");
  log::trace!(target: "global", "filtered");

  assert_eq!(log::max_level(), LevelFilter::Debug);
  assert_eq!(*lines.lock().unwrap(), vec![(Level::Debug, "global: installed".to_owned())]);
}
