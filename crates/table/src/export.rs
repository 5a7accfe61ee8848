use std::{
    borrow::Cow,
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::info;

use crate::ConversionTable;

/// File name the table is written to when no other path is configured.
pub const DEFAULT_FILE_NAME: &str = "conversions by energy content.csv";

/// Errors that can occur when exporting a table.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Writes `table` as comma-separated values.
///
/// The header holds an empty index cell followed by the unit labels. Each row
/// starts with its zero-based index.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_csv<W: Write>(table: &ConversionTable, mut writer: W) -> io::Result<()> {
    let header: Vec<_> = table.units().iter().map(|u| escape(u.label())).collect();
    writeln!(writer, ",{}", header.join(","))?;

    for (index, row) in table.rows().iter().enumerate() {
        let cells: Vec<_> = row.values().iter().map(|&v| format_value(v)).collect();
        writeln!(writer, "{index},{}", cells.join(","))?;
    }

    writer.flush()
}

/// Writes `table` to a CSV file at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created or written.
pub fn export(table: &ConversionTable, path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    let io_error = |source| ExportError::Io {
        path: path.to_owned(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    write_csv(table, BufWriter::new(file)).map_err(io_error)?;

    info!(path = %path.display(), rows = table.rows().len(), "wrote conversion table");
    Ok(())
}

/// Formats a float with the shortest representation that round-trips,
/// keeping a decimal point on whole numbers.
fn format_value(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use powerfuel_chem::Constants;

    use crate::build_table;

    #[test]
    fn values_keep_a_decimal_point() {
        assert_eq!(format_value(1.0), "1.0");
        assert_eq!(format_value(8.76), "8.76");
        assert_eq!(format_value(8760.0), "8760.0");
        assert_eq!(format_value(0.00001), "0.00001");
        assert_eq!(format_value(f64::INFINITY), "inf");
    }

    #[test]
    fn escape_quotes_only_when_needed() {
        assert_eq!(escape("1000 m^3(CH4)/yr"), "1000 m^3(CH4)/yr");
        assert_eq!(escape("a,b"), "\"a,b\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn csv_layout() {
        let table = build_table(&Constants::standard()).unwrap();
        let mut buffer = Vec::new();
        write_csv(&table, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(
            lines[0],
            ",MW,GWh/yr,kg(H2)/hr,ton(H2)/yr,m^3(CH4)/hr,1000 m^3(CH4)/yr,kg(NH3)/hr,t(NH3)/yr"
        );
        assert_eq!(lines.len(), 9);
        assert!(lines[1].starts_with("0,1.0,8.76,"));
        assert!(lines[8].starts_with("7,"));
        assert!(lines.iter().all(|line| line.split(',').count() == 9));
    }

    #[test]
    fn export_reports_path_on_failure() {
        let table = build_table(&Constants::standard()).unwrap();
        let path = std::env::temp_dir()
            .join(format!("powerfuel-missing-directory-{}", std::process::id()))
            .join("nested")
            .join(DEFAULT_FILE_NAME);

        let error = export(&table, &path).unwrap_err();
        let ExportError::Io { path: reported, .. } = &error;
        assert_eq!(reported, &path);
        assert!(error.to_string().contains("conversions by energy content.csv"));
    }
}
