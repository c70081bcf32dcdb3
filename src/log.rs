use chrono::Timelike;
use colored::{ColoredString, Colorize};
use std::fmt::Display;

pub enum Log {
    Info,
    Warning,
    Error,
}

impl Log {
    fn letter(&self) -> ColoredString {
        match self {
            Log::Info => "I".green(),
            Log::Warning => "W".yellow(),
            Log::Error => "E".red(),
        }
        .bold()
    }
}

fn stamp() -> String {
    let now = chrono::Local::now();
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

pub fn log(kind: Log, msg: impl Display) {
    println!("{} {} {msg}", kind.letter(), stamp().dimmed());
}
