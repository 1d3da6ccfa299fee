//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::client::Page;
use crate::error::Result;

pub mod json;
pub mod progress;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Page<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => Ok(json::format_json_page(self)?),
            OutputFormat::Table => {
                let mut out = table::format_table(&self.items);
                if self.total_pages > 1 || (self.items.is_empty() && self.total > 0) {
                    out.push('\n');
                    out.push_str(&table::page_footer(self));
                }
                Ok(out)
            }
        }
    }
}
