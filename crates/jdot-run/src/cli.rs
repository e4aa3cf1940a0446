use clap::Parser;
use jdot_fetch::{FetchConfig, HttpClient, Source};
use jdot_query::{Document, Value, codec};
use miette::IntoDiagnostic;
use std::io::{self, BufWriter, Write};
use std::time::Duration;

#[derive(Parser, Debug, Default)]
#[command(name = "jdot")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(after_help = "# Examples:\n\n\
    ## To print a value from the first entry:\n\
    jdot forecast.json DailyForecasts.Temperature.Minimum.Value\n\n\
    ## To print a value from every entry of a top-level array:\n\
    jdot --each forecast.json Date\n\n\
    ## To query an HTTP endpoint:\n\
    jdot 'https://example.com/forecast.json' Headline.Text")]
#[command(
    about = "jdot reads a JSON document and prints the value at a dotted path.",
    long_about = None
)]
#[command(group(
    clap::ArgGroup::new("query")
        .args(["each", "data_type", "has", "is_null", "lookup", "length"])
        .multiple(false)
))]
pub struct Cli {
    /// File path or http(s) URL of the document
    source: String,

    /// Dotted member path, e.g. Temperature.Minimum.Value
    path: Option<String>,

    /// Treat SOURCE as a file or a URL instead of detecting it
    #[arg(long, value_enum)]
    mode: Option<Mode>,

    /// Top-level entry to query
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    entry: i64,

    /// Print the value at PATH for every entry
    #[arg(long, requires = "path", conflicts_with = "entry")]
    each: bool,

    /// Print the data type at PATH
    #[arg(short = 't', long = "type", requires = "path")]
    data_type: bool,

    /// Print whether PATH exists
    #[arg(long, requires = "path")]
    has: bool,

    /// Print whether PATH is null or absent
    #[arg(long, requires = "path")]
    is_null: bool,

    /// Search for a single member name, descending into first array elements
    #[arg(long, requires = "path")]
    lookup: bool,

    /// Print the number of entries in the document
    #[arg(long)]
    length: bool,

    /// Accept invalid TLS certificates
    #[arg(long, default_value_t = false)]
    insecure: bool,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<f64>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum Mode {
    File,
    Network,
}

impl From<Mode> for jdot_fetch::Mode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::File => jdot_fetch::Mode::File,
            Mode::Network => jdot_fetch::Mode::Network,
        }
    }
}

impl Cli {
    pub fn run(&self) -> miette::Result<()> {
        let client = HttpClient::new(&self.fetch_config()).into_diagnostic()?;
        let source = match self.mode {
            Some(mode) => Source::new(&self.source, mode.into()).into_diagnostic()?,
            None => Source::detect(&self.source),
        };
        let document = jdot_fetch::open(&source, &client)?;

        let stdout = io::stdout();
        let mut handle = BufWriter::new(stdout.lock());
        self.write_output(&document, &mut handle)?;
        handle.flush().into_diagnostic()
    }

    fn fetch_config(&self) -> FetchConfig {
        let mut config = FetchConfig::from_env();

        if let Some(secs) = self.timeout.filter(|secs| *secs > 0.0) {
            config = config.with_timeout(Duration::from_secs_f64(secs));
        }

        if self.insecure {
            config = config.with_accept_invalid_certs(true);
        }

        config
    }

    fn write_output<W: Write>(&self, document: &Document, out: &mut W) -> miette::Result<()> {
        if self.length {
            return writeln!(out, "{}", document.cardinality()).into_diagnostic();
        }

        let Some(path) = self.path.as_deref() else {
            return writeln!(out, "{}", document.dump()).into_diagnostic();
        };

        if self.each {
            for value in document.each(path) {
                match value {
                    Ok(value) => writeln!(out, "{}", render(value)).into_diagnostic()?,
                    Err(e) if e.is_absent() => writeln!(out, "null").into_diagnostic()?,
                    Err(e) => return Err(e.into()),
                }
            }
            return Ok(());
        }

        let line = if self.data_type {
            document.data_type(path, self.entry).to_string()
        } else if self.has {
            document.has_item(path, self.entry)?.to_string()
        } else if self.is_null {
            document.is_null(path, self.entry)?.to_string()
        } else if self.lookup {
            render(document.lookup(path, self.entry)?)
        } else {
            render(document.resolve(path, self.entry)?)
        };

        writeln!(out, "{}", line).into_diagnostic()
    }
}

/// Strings print without quotes, containers as indented JSON.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => codec::print(value),
        _ => value.to_string(),
    }
}
