//! Output formatting for provisioning results.

use crate::cli::OutputFormat;
use crate::provider::TableHandle;

/// Format the created table's handle for output.
///
/// Pretty output is the bare table name, suitable for piping into other
/// commands.
pub fn format_handle(handle: &TableHandle, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(handle).unwrap_or_default(),
        OutputFormat::Pretty => handle.table_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pretty_is_the_bare_name() {
        let handle = TableHandle {
            table_name: "Music".to_string(),
        };
        assert_eq!(format_handle(&handle, OutputFormat::Pretty), "Music");
    }

    #[test]
    fn test_json_serializes_the_handle() {
        let handle = TableHandle {
            table_name: "Music".to_string(),
        };
        assert_eq!(
            format_handle(&handle, OutputFormat::Json),
            r#"{"table_name":"Music"}"#
        );
    }
}
