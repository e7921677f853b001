//! Line-oriented scripts that replay form interactions
//!
//! ```text
//! # add two books, fix a typo, drop the first
//! type title "The Hobbit"
//! type author Tolkien
//! ...
//! add
//! edit 1
//! change isbn 978-0261102217
//! save
//! delete 1
//! ```

use crate::catalog::Field;
use crate::{CatalogError, Result};

/// One button press or keystroke batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Set a field of the add form
    Type { field: Field, value: String },
    Add,
    /// Begin editing the record at a 0-based index
    Edit { index: usize },
    /// Set a field of the row being edited
    Change { field: Field, value: String },
    Save,
    Cancel,
    /// Delete the record at a 0-based index
    Delete { index: usize },
    Show,
}

impl ScriptCommand {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptCommand::Type { .. } => "type",
            ScriptCommand::Add => "add",
            ScriptCommand::Edit { .. } => "edit",
            ScriptCommand::Change { .. } => "change",
            ScriptCommand::Save => "save",
            ScriptCommand::Cancel => "cancel",
            ScriptCommand::Delete { .. } => "delete",
            ScriptCommand::Show => "show",
        }
    }
}

/// A parsed command with its 1-based source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

/// Parse a whole script, failing on the first malformed line
pub fn parse_script(source: &str) -> Result<Vec<ScriptLine>> {
    let mut lines = Vec::new();
    for (idx, text) in source.lines().enumerate() {
        let line = idx + 1;
        if let Some(command) = parse_line(line, text)? {
            lines.push(ScriptLine { line, command });
        }
    }
    Ok(lines)
}

/// Parse one line; blank lines and `#` comments yield `None`
pub fn parse_line(line: usize, text: &str) -> Result<Option<ScriptCommand>> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let words = shell_words::split(trimmed)
        .map_err(|e| CatalogError::script(line, format!("unbalanced quoting: {}", e)))?;
    let (name, args) = match words.split_first() {
        Some((name, args)) => (name.as_str(), args),
        None => return Ok(None),
    };

    let command = match name {
        "type" => {
            let (field, value) = field_and_value(line, name, args)?;
            ScriptCommand::Type { field, value }
        }
        "change" => {
            let (field, value) = field_and_value(line, name, args)?;
            ScriptCommand::Change { field, value }
        }
        "edit" => ScriptCommand::Edit {
            index: row_index(line, name, args)?,
        },
        "delete" => ScriptCommand::Delete {
            index: row_index(line, name, args)?,
        },
        "add" | "save" | "cancel" | "show" => {
            if !args.is_empty() {
                return Err(CatalogError::script(
                    line,
                    format!("'{}' takes no arguments", name),
                ));
            }
            match name {
                "add" => ScriptCommand::Add,
                "save" => ScriptCommand::Save,
                "cancel" => ScriptCommand::Cancel,
                _ => ScriptCommand::Show,
            }
        }
        other => {
            return Err(CatalogError::script(
                line,
                format!("unknown command '{}'", other),
            ))
        }
    };

    Ok(Some(command))
}

fn field_and_value(line: usize, name: &str, args: &[String]) -> Result<(Field, String)> {
    match args {
        [field, value] => {
            let field = field
                .parse::<Field>()
                .map_err(|e| CatalogError::script(line, e))?;
            Ok((field, value.clone()))
        }
        // shell_words drops a word starting with '#' as a comment
        _ => Err(CatalogError::script(
            line,
            format!(
                "usage: {} <field> <value> (quote values containing spaces or starting with '#')",
                name
            ),
        )),
    }
}

fn row_index(line: usize, name: &str, args: &[String]) -> Result<usize> {
    let [row] = args else {
        return Err(CatalogError::script(line, format!("usage: {} <row>", name)));
    };
    match row.parse::<usize>() {
        Ok(0) | Err(_) => Err(CatalogError::script(
            line,
            format!("row must be a positive S.No, got '{}'", row),
        )),
        Ok(n) => Ok(n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_script() {
        let source = r#"
# header comment
type title "The Hobbit"
type year 1937
add
edit 1
change author 'J. R. R. Tolkien'
save
cancel
delete 2
show
"#;
        let commands: Vec<_> = parse_script(source)
            .unwrap()
            .into_iter()
            .map(|l| l.command)
            .collect();

        assert_eq!(
            commands,
            vec![
                ScriptCommand::Type {
                    field: Field::Title,
                    value: "The Hobbit".to_string()
                },
                ScriptCommand::Type {
                    field: Field::YearOfPublication,
                    value: "1937".to_string()
                },
                ScriptCommand::Add,
                ScriptCommand::Edit { index: 0 },
                ScriptCommand::Change {
                    field: Field::Author,
                    value: "J. R. R. Tolkien".to_string()
                },
                ScriptCommand::Save,
                ScriptCommand::Cancel,
                ScriptCommand::Delete { index: 1 },
                ScriptCommand::Show,
            ]
        );
    }

    #[test]
    fn test_line_numbers_are_source_lines() {
        let lines = parse_script("\n\nadd\n# c\nsave\n").unwrap();
        assert_eq!(lines[0].line, 3);
        assert_eq!(lines[1].line, 5);
    }

    #[test]
    fn test_empty_value_must_be_quoted() {
        let cmd = parse_line(1, "type isbn \"\"").unwrap().unwrap();
        assert_eq!(
            cmd,
            ScriptCommand::Type {
                field: Field::Isbn,
                value: String::new()
            }
        );
        assert!(parse_line(1, "type isbn").is_err());
    }

    #[test]
    fn test_hash_value_is_not_silently_dropped() {
        let err = parse_line(3, "type isbn #978-0261102217").unwrap_err();
        match err {
            CatalogError::Script { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("'#'"));
            }
            other => panic!("unexpected error: {other}"),
        }

        let cmd = parse_line(3, "change isbn '#978-0261102217'").unwrap().unwrap();
        assert_eq!(
            cmd,
            ScriptCommand::Change {
                field: Field::Isbn,
                value: "#978-0261102217".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_command_reports_line() {
        let err = parse_script("add\nfrobnicate 3\n").unwrap_err();
        match err {
            CatalogError::Script { line, message } => {
                assert_eq!(line, 2);
                assert!(message.contains("frobnicate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse_line(4, "type publisher Penguin").unwrap_err();
        assert!(matches!(err, CatalogError::Script { line: 4, .. }));
    }

    #[test]
    fn test_row_zero_and_garbage_rejected() {
        assert!(parse_line(1, "delete 0").is_err());
        assert!(parse_line(1, "edit first").is_err());
        assert!(parse_line(1, "edit").is_err());
        assert!(parse_line(1, "edit 1 2").is_err());
    }

    #[test]
    fn test_bare_commands_take_no_arguments() {
        assert!(parse_line(1, "add now").is_err());
        assert_eq!(parse_line(1, "  save  ").unwrap(), Some(ScriptCommand::Save));
    }

    #[test]
    fn test_unbalanced_quote_rejected() {
        assert!(parse_line(1, "type title \"open").is_err());
    }
}
