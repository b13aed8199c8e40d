//! Output format selection
//!
//! The user picks a format once on the command line ([`OutputOptions`]); each
//! command says how its data looks in the default format ([`Layout`]).
//! [`select`] combines the two into exactly one [`Renderer`].

use std::convert::Infallible;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::OutputError;
use crate::record::RecordSet;
use crate::render::{write_array, write_custom, write_key_values, write_single, write_table};

/// Output format requested on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human oriented output (default)
    #[default]
    Table,
    /// JSON objects with machine keys
    Json,
    /// User template, one line per record
    Custom,
}

impl OutputFormat {
    /// Parse a format flag, falling back to `Table` for anything unknown
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim().to_ascii_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "custom" => OutputFormat::Custom,
            _ => OutputFormat::Table,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_flag(s))
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Custom => write!(f, "custom"),
        }
    }
}

/// Presentation options chosen by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    /// Indent JSON output
    pub pretty: bool,
    /// Template for `custom` output
    pub template: Option<String>,
}

impl OutputOptions {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
            template: None,
        }
    }

    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Whether output is meant for programs rather than people
    #[must_use]
    pub fn is_machine_readable(&self) -> bool {
        matches!(self.format, OutputFormat::Json | OutputFormat::Custom)
    }
}

/// How a command presents itself in the default format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Aligned columns, one row per record
    Table,
    /// `label: value` lines for a single record
    KeyValues,
    /// A fixed sentence instead of the records
    Message(String),
}

/// Whether JSON output is one object or an array of objects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Single,
    Array,
}

/// Per-command presentation choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub view: View,
    pub json: JsonShape,
}

impl Layout {
    /// A listing: table by default, JSON array
    #[must_use]
    pub fn table() -> Self {
        Self {
            view: View::Table,
            json: JsonShape::Array,
        }
    }

    /// A summary of one entity: key-value lines by default, JSON array
    #[must_use]
    pub fn key_values_array() -> Self {
        Self {
            view: View::KeyValues,
            json: JsonShape::Array,
        }
    }

    /// The result of an action: a sentence by default, JSON object
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            view: View::Message(message.into()),
            json: JsonShape::Single,
        }
    }
}

/// The renderer chosen for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Renderer<'a> {
    Table,
    KeyValues,
    Message(&'a str),
    Json { shape: JsonShape, pretty: bool },
    Template(&'a str),
}

impl Renderer<'_> {
    /// Write the records in this renderer's format
    ///
    /// # Errors
    /// Returns an error if the records do not fit the renderer or writing
    /// fails.
    pub fn write<W: Write>(&self, records: &RecordSet, out: &mut W) -> Result<(), OutputError> {
        match self {
            Renderer::Table => write_table(records, out),
            Renderer::KeyValues => write_key_values(records, out),
            Renderer::Message(message) => {
                writeln!(out, "{message}")?;
                Ok(())
            }
            Renderer::Json {
                shape: JsonShape::Single,
                pretty,
            } => write_single(records, *pretty, out),
            Renderer::Json {
                shape: JsonShape::Array,
                pretty,
            } => write_array(records, *pretty, out),
            Renderer::Template(template) => write_custom(records, template, out),
        }
    }
}

/// Choose the renderer for these options and layout
///
/// # Errors
/// Returns `MissingTemplate` when custom output has no template.
pub fn select<'a>(
    options: &'a OutputOptions,
    layout: &'a Layout,
) -> Result<Renderer<'a>, OutputError> {
    let renderer = match options.format {
        OutputFormat::Json => Renderer::Json {
            shape: layout.json,
            pretty: options.pretty,
        },
        OutputFormat::Custom => {
            let template = options
                .template
                .as_deref()
                .ok_or(OutputError::MissingTemplate)?;
            Renderer::Template(template)
        }
        OutputFormat::Table => match &layout.view {
            View::Table => Renderer::Table,
            View::KeyValues => Renderer::KeyValues,
            View::Message(message) => Renderer::Message(message),
        },
    };
    Ok(renderer)
}

/// Validate the records and write them with the selected renderer
///
/// # Errors
/// Returns an error if the record set is not uniform, no renderer can be
/// selected, or writing fails. Nothing is written in the first two cases.
pub fn render<W: Write>(
    records: &RecordSet,
    options: &OutputOptions,
    layout: &Layout,
    out: &mut W,
) -> Result<(), OutputError> {
    records.validate()?;
    let renderer = select(options, layout)?;
    tracing::debug!(format = %options.format, records = records.len(), "rendering output");
    renderer.write(records, out)
}
