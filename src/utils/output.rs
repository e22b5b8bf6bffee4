use std::fmt::Display;
use std::io::{self, Write};

/// Output format configuration
#[derive(Clone, Debug)]
pub struct OutputFormat {
    pub raw: bool,
}

impl OutputFormat {
    pub fn new(raw: bool) -> Self {
        Self { raw }
    }

    /// Write tabular data - either raw (tab-separated) or formatted (column-aligned)
    pub fn write_table<T, W>(&self, data: &[Vec<T>], out: &mut W) -> io::Result<()>
    where
        T: Display + AsRef<str>,
        W: Write,
    {
        for line in self.render_table(data) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }

    /// Render rows to lines without printing
    pub fn render_table<T>(&self, data: &[Vec<T>]) -> Vec<String>
    where
        T: Display + AsRef<str>,
    {
        if data.is_empty() {
            return Vec::new();
        }

        if self.raw {
            data.iter()
                .map(|row| {
                    row.iter()
                        .map(|cell| cell.as_ref())
                        .collect::<Vec<_>>()
                        .join("\t")
                })
                .collect()
        } else {
            // Column-aligned like `column -t`
            Self::render_formatted_table(data)
        }
    }

    fn render_formatted_table<T>(data: &[Vec<T>]) -> Vec<String>
    where
        T: Display + AsRef<str>,
    {
        let num_cols = data.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut col_widths = vec![0; num_cols];

        for row in data {
            for (i, cell) in row.iter().enumerate() {
                col_widths[i] = col_widths[i].max(cell.as_ref().len());
            }
        }

        data.iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(i, cell)| {
                        if i == row.len() - 1 {
                            // Last column - no padding needed
                            cell.to_string()
                        } else {
                            format!("{:<width$}", cell.as_ref(), width = col_widths[i])
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("  ")
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_output() {
        let format = OutputFormat::new(true);
        let data = vec![
            vec!["short", "medium", "very_long_column"],
            vec!["a", "bb", "ccc"],
        ];

        assert_eq!(
            format.render_table(&data),
            vec!["short\tmedium\tvery_long_column", "a\tbb\tccc"]
        );
    }

    #[test]
    fn test_formatted_output() {
        let format = OutputFormat::new(false);
        let data = vec![
            vec!["short", "medium", "very_long_column"],
            vec!["a", "bb", "ccc"],
        ];

        assert_eq!(
            format.render_table(&data),
            vec!["short  medium  very_long_column", "a      bb      ccc"]
        );
    }

    #[test]
    fn test_write_table() {
        let format = OutputFormat::new(true);
        let mut buf = Vec::new();
        format
            .write_table(&[vec!["5", "learner@example.org"]], &mut buf)
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "5\tlearner@example.org\n");
    }

    #[test]
    fn test_empty_table() {
        let format = OutputFormat::new(false);
        let data: Vec<Vec<String>> = Vec::new();
        assert!(format.render_table(&data).is_empty());
    }
}
