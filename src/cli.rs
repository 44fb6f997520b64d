//! Command-line front end: reads a raw header block and writes it back in
//! normalized wire form.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::HeaderRules;
use crate::http::error::HeaderError;
use crate::http::headers::Headers;

#[derive(Debug, Parser)]
#[command(name = "hyperheaders")]
#[command(about = "Normalize a raw HTTP header block read from stdin", long_about = None)]
pub struct Cli {
    /// Split raw header values on commas
    #[arg(long)]
    pub split: bool,

    /// TOML file listing single_value_names and folded_multi_names
    pub rules: Option<PathBuf>,
}

impl Cli {
    /// Rules from the given file, or the defaults when none is given or the
    /// file cannot be used.
    pub fn header_rules(&self) -> HeaderRules {
        match &self.rules {
            Some(path) => HeaderRules::from_file(path),
            None => HeaderRules::default(),
        }
    }

    /// Ingests `input` and renders it as `\r\n` terminated header lines.
    pub fn render(&self, input: &str) -> Result<String, HeaderError> {
        let mut headers = Headers::with_rules(Arc::new(self.header_rules()));
        if self.split {
            headers = headers.with_raw_header_comma_separation_enabled();
        }
        Ok(headers.with_raw_block(input)?.stringify())
    }
}
