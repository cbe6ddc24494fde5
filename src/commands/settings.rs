//! `settings`: show the effective configuration

use std::io::{self, BufRead, Write};

use clap::Args;

use crate::application::ApplicationResult;
use crate::command::{Command, ConsoleResult, Descriptor};
use crate::config::Settings;

pub static DESCRIPTOR: Descriptor = Descriptor::new("settings", "SYSTEM");

#[derive(Args, Debug, Clone, Default)]
pub struct ShowSettings {
    #[arg(skip)]
    pub settings: Settings,
}

impl Command for ShowSettings {
    fn descriptor(&self) -> &'static Descriptor {
        &DESCRIPTOR
    }

    fn load_fallbacks(&mut self, _input: &mut dyn BufRead, settings: &Settings) -> ApplicationResult<()> {
        self.settings = settings.clone();
        Ok(())
    }

    fn invoke(&self, output: &mut dyn Write, error: &mut dyn Write) -> io::Result<ConsoleResult> {
        match self.settings.to_toml() {
            Ok(text) => {
                write!(output, "{}", text)?;
                Ok(ConsoleResult::Okay)
            }
            Err(e) => {
                writeln!(error, "{}", e)?;
                Ok(ConsoleResult::Failure)
            }
        }
    }
}
