//! Line-oriented fridge scripts.
//!
//! ```text
//! # comment
//! put chicken 4
//! exit chicken 3
//! sweep 2
//! show --freshness
//! export
//! ```

use thiserror::Error;

/// One script instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Put { name: String, quantity: usize },
    Exit { name: String, quantity: usize },
    Sweep { days: u64 },
    Show { freshness: bool },
    Export,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },

    #[error("line {line}: `{command}` is missing its {argument}")]
    MissingArgument {
        line: usize,
        command: &'static str,
        argument: &'static str,
    },

    #[error("line {line}: `{value}` is not a valid number")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: unexpected argument `{value}`")]
    UnexpectedArgument { line: usize, value: String },
}

/// Parse a whole script. Blank lines and `#` comments are skipped.
pub fn parse(source: &str) -> Result<Vec<(usize, Command)>, ScriptError> {
    let mut commands = Vec::new();
    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        if let Some(cmd) = parse_line(line_no, raw)? {
            commands.push((line_no, cmd));
        }
    }
    Ok(commands)
}

/// Parse a single line; `Ok(None)` for blank or comment lines.
pub fn parse_line(line: usize, raw: &str) -> Result<Option<Command>, ScriptError> {
    let content = raw.split('#').next().unwrap_or_default();
    let mut words = content.split_whitespace();
    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword {
        "put" => {
            let (name, quantity) = name_and_quantity(line, "put", &mut words)?;
            Command::Put { name, quantity }
        }
        "exit" => {
            let (name, quantity) = name_and_quantity(line, "exit", &mut words)?;
            Command::Exit { name, quantity }
        }
        "sweep" => {
            let days = match words.next() {
                Some(raw) => number(line, raw)?,
                None => 1,
            };
            Command::Sweep { days }
        }
        "show" => {
            let freshness = match words.next() {
                None => false,
                Some("--freshness") => true,
                Some(other) => {
                    return Err(ScriptError::UnexpectedArgument {
                        line,
                        value: other.to_string(),
                    });
                }
            };
            Command::Show { freshness }
        }
        "export" => Command::Export,
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };

    if let Some(extra) = words.next() {
        return Err(ScriptError::UnexpectedArgument {
            line,
            value: extra.to_string(),
        });
    }
    Ok(Some(command))
}

fn name_and_quantity<'a>(
    line: usize,
    command: &'static str,
    words: &mut impl Iterator<Item = &'a str>,
) -> Result<(String, usize), ScriptError> {
    let name = words.next().ok_or(ScriptError::MissingArgument {
        line,
        command,
        argument: "item name",
    })?;
    let quantity = words.next().ok_or(ScriptError::MissingArgument {
        line,
        command,
        argument: "quantity",
    })?;
    Ok((name.to_string(), number(line, quantity)?))
}

fn number<T: core::str::FromStr>(line: usize, raw: &str) -> Result<T, ScriptError> {
    raw.parse().map_err(|_| ScriptError::InvalidNumber {
        line,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command() {
        let script = "\
            # stock up\n\
            put chicken 4\n\
            exit chicken 3\n\
            \n\
            sweep\n\
            sweep 3\n\
            show\n\
            show --freshness # with decay\n\
            export\n";

        let commands: Vec<Command> = parse(script).unwrap().into_iter().map(|(_, c)| c).collect();
        assert_eq!(
            commands,
            vec![
                Command::Put {
                    name: "chicken".to_string(),
                    quantity: 4
                },
                Command::Exit {
                    name: "chicken".to_string(),
                    quantity: 3
                },
                Command::Sweep { days: 1 },
                Command::Sweep { days: 3 },
                Command::Show { freshness: false },
                Command::Show { freshness: true },
                Command::Export,
            ]
        );
    }

    #[test]
    fn keeps_source_line_numbers() {
        let parsed = parse("\n# header\nexport\n").unwrap();
        assert_eq!(parsed, vec![(3, Command::Export)]);
    }

    #[test]
    fn rejects_unknown_commands() {
        let err = parse("put apple 1\neat apple 1\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 2,
                command: "eat".to_string()
            }
        );
    }

    #[test]
    fn rejects_missing_and_malformed_quantities() {
        let err = parse_line(1, "put apple").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::MissingArgument {
                argument: "quantity",
                ..
            }
        ));

        let err = parse_line(4, "exit apple -2").unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidNumber {
                line: 4,
                value: "-2".to_string()
            }
        );
        assert!(err.to_string().starts_with("line 4:"));
    }

    #[test]
    fn rejects_trailing_arguments() {
        let err = parse_line(1, "export now").unwrap_err();
        assert!(matches!(err, ScriptError::UnexpectedArgument { .. }));

        let err = parse_line(1, "show --counts").unwrap_err();
        assert!(matches!(err, ScriptError::UnexpectedArgument { .. }));
    }
}
