extern crate dotenv;
extern crate log;
extern crate serde_json;

extern crate webe_log;
extern crate webe_status;

use std::env;

use log::{info, warn, LevelFilter, Log};
use webe_log::{ConsoleLogger, WebeLogger};
use webe_status::{code, Category, Status};

const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

fn main() {
  // load environment. the .env file is optional for the demo
  let env_loaded = dotenv::dotenv().is_ok();
  let (level, bad_level) = match env::var("WEBE_LOG_LEVEL") {
    Ok(value) => match value.parse::<LevelFilter>() {
      Ok(level) => (level, None),
      Err(_) => (DEFAULT_LOG_LEVEL, Some(value)),
    },
    Err(_) => (DEFAULT_LOG_LEVEL, None),
  };

  let mut logger = WebeLogger::new(level);
  logger.add_sink(Box::new(ConsoleLogger::new()));
  logger.init().expect("Failed to install logger");

  if !env_loaded {
    info!("No .env file found, using defaults");
  }
  if let Some(value) = bad_level {
    warn!("WEBE_LOG_LEVEL={} is not a log level, using {}", value, DEFAULT_LOG_LEVEL);
  }

  // the whole registry, grouped by category
  for category in Category::ALL.iter() {
    info!("-- {} --", category);
    for entry in webe_status::entries().iter().filter(|entry| entry.category() == *category) {
      if entry.is_deprecated() {
        info!("{} {} ({}, deprecated)", entry.code(), entry.phrase(), entry.reference());
      } else {
        info!("{} {} ({})", entry.code(), entry.phrase(), entry.reference());
      }
    }
  }

  // lookups that miss come back as errors, never as a made up phrase
  for status_code in [code::IM_A_TEAPOT, 499, 599, 777].iter() {
    match webe_status::phrase_of(*status_code) {
      Ok(phrase) => info!("phrase_of({}) = {:?}", status_code, phrase),
      Err(err) => warn!("phrase_of({}) failed: {}", status_code, err),
    }
    match webe_status::category_of(*status_code) {
      Ok(category) => info!("category_of({}) = {}", status_code, category),
      Err(err) => warn!("category_of({}) failed: {}", status_code, err),
    }
  }
  for phrase in ["Not Found", "not found"].iter() {
    match webe_status::code_of(phrase) {
      Ok(status_code) => info!("code_of({:?}) = {}", phrase, status_code),
      Err(err) => warn!("code_of({:?}) failed: {}", phrase, err),
    }
  }

  // checking what a server is about to send
  for status in [Status::new(404, "Not Found"), Status::new(404, "Nothing Here")].iter() {
    info!("{:?} is standard: {}", status.to_string(), status.is_standard());
  }

  match webe_status::lookup_by_code(code::NOT_FOUND) {
    Ok(entry) => match serde_json::to_string_pretty(entry) {
      Ok(json) => println!("{}", json),
      Err(err) => warn!("Failed to serialize entry: {}", err),
    },
    Err(err) => warn!("{}", err),
  }

  log::logger().flush();
}
