//! CLI arguments.

use acceptlang::{Resolution, Selector, error::Error, header::EnvHeaderSource};
use clap::Parser;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};
use toml::{Table, Value};

/// The table which holds the selector options in a configuration file.
const CONFIG_TABLE: &str = "accept-language";

/// CLI tool to resolve the preferred language of an `Accept-Language` header.
#[derive(Debug, Parser)]
#[clap(name = "acceptlang", version)]
pub struct Cli {
    /// The header value. Defaults to the `HTTP_ACCEPT_LANGUAGE` environment variable.
    header: Option<String>,
    /// Path to a TOML configuration file.
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// A language supported by the application. It can be repeated.
    #[clap(short, long = "accept", value_name = "LANG")]
    accept: Vec<String>,
    /// Match the accepted languages exactly instead of by subtags.
    #[clap(long)]
    exact: bool,
    /// The fallback language.
    #[clap(short, long = "default", value_name = "LANG")]
    default_language: Option<String>,
    /// The output subtag separator.
    #[clap(short, long)]
    separator: Option<String>,
    /// Accept primary subtags with three letters.
    #[clap(long)]
    any_length: bool,
    /// Print the resolution as JSON.
    #[clap(long)]
    json: bool,
    /// Enable verbose logging.
    #[clap(long)]
    verbose: bool,
}

impl Cli {
    /// Runs the command and writes the resolution to the standard output.
    pub fn run(self) -> Result<(), Error> {
        let config = self.load_config();
        crate::logger::init(self.verbose, config.as_ref().ok());

        let selector = Selector::try_from_table(&self.selector_table(config?))?;
        let resolution = self.resolve(&selector);
        let output = render(&resolution, self.json)?;
        writeln!(io::stdout().lock(), "{output}")?;
        Ok(())
    }

    /// Loads the configuration file. An empty table is returned if there is no file.
    fn load_config(&self) -> Result<Table, Error> {
        let Some(path) = &self.config else {
            return Ok(Table::new());
        };
        let content = fs::read_to_string(path).map_err(|err| {
            Error::with_source(format!("fail to read `{}`", path.display()), err)
        })?;
        content.parse::<Table>().map_err(|err| {
            Error::with_source(format!("fail to parse `{}`", path.display()), err)
        })
    }

    /// Returns the selector options of the configuration overridden by the flags.
    fn selector_table(&self, mut config: Table) -> Table {
        let mut table = match config.remove(CONFIG_TABLE) {
            Some(Value::Table(table)) => table,
            Some(value) => {
                config.insert(CONFIG_TABLE.to_owned(), value);
                config
            }
            None => {
                config.remove("tracing");
                config
            }
        };
        if !self.accept.is_empty() {
            let languages = self.accept.iter().cloned().map(Value::String).collect();
            table.insert("accepted-languages".to_owned(), Value::Array(languages));
        }
        if self.exact {
            table.insert("exact-match-only".to_owned(), Value::Boolean(true));
        }
        if let Some(language) = &self.default_language {
            table.insert("default-language".to_owned(), Value::String(language.clone()));
        }
        if let Some(separator) = &self.separator {
            table.insert("separator".to_owned(), Value::String(separator.clone()));
        }
        if self.any_length {
            table.insert("two-letter-only".to_owned(), Value::Boolean(false));
        }
        table
    }

    /// Resolves the header from the argument or the environment.
    fn resolve(&self, selector: &Selector) -> Resolution {
        match &self.header {
            Some(header) => selector.resolve(header),
            None => selector.resolve_from(&EnvHeaderSource::default()),
        }
    }
}

/// Renders the resolution as the preferred tag or as a JSON object.
fn render(resolution: &Resolution, json: bool) -> Result<String, Error> {
    if json {
        Ok(serde_json::to_string(resolution)?)
    } else {
        Ok(resolution.preferred_tag.clone())
    }
}
