use salp_core::{CoreError, FieldId};

/// One line typed at the form prompt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormCommand {
    Empty,
    Set { field: FieldId, value: String },
    Show,
    Submit,
    Reset,
    Help,
    Quit,
}

impl FormCommand {
    /// Parse `<field>=<value>`, `set <field> <value>`, or a bare keyword.
    ///
    /// # Errors
    ///
    /// Returns a message for an unknown keyword or field.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        if let Some((field, value)) = line.split_once('=') {
            return Ok(Self::Set {
                field: parse_field(field)?,
                value: value.trim().to_string(),
            });
        }

        let (keyword, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(keyword, rest)| (keyword, rest.trim()));
        match keyword {
            "" => Ok(Self::Empty),
            "set" => {
                let (field, value) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| "usage: set <field> <value>".to_string())?;
                Ok(Self::Set {
                    field: parse_field(field)?,
                    value: value.trim().to_string(),
                })
            }
            "show" => Ok(Self::Show),
            "submit" => Ok(Self::Submit),
            "reset" => Ok(Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(format!("unknown command '{other}' (type 'help')")),
        }
    }
}

fn parse_field(raw: &str) -> Result<FieldId, String> {
    raw.parse::<FieldId>().map_err(|error: CoreError| error.to_string())
}
