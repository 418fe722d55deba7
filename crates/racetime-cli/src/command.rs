//! Console command parsing

/// A parsed console instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        given_name: String,
        family_name: String,
        finish: String,
    },
    Del(u32),
    Cmp(u32, u32),
    Lst,
    Hlp,
    Cls,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("The following instruction was not recognized: {0}\nMake sure there are no typos!")]
    Unrecognized(String),

    #[error("Invalid number of arguments. Expected: {expected}, but received {actual} instead")]
    Arity { expected: usize, actual: usize },

    #[error("Not a valid ID: {0}")]
    InvalidId(String),
}

pub type Result<T> = std::result::Result<T, CommandError>;

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Argument counts in errors include the keyword itself.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some(keyword) = tokens.first() else {
            return Ok(None);
        };

        let keyword = keyword.to_uppercase();
        let command = match keyword.as_str() {
            "ADD" => {
                expect_arity(&tokens, 4)?;
                Command::Add {
                    given_name: tokens[1].to_string(),
                    family_name: tokens[2].to_string(),
                    finish: tokens[3].to_string(),
                }
            }
            "DEL" => {
                expect_arity(&tokens, 2)?;
                Command::Del(parse_id(tokens[1])?)
            }
            "CMP" => {
                expect_arity(&tokens, 3)?;
                Command::Cmp(parse_id(tokens[1])?, parse_id(tokens[2])?)
            }
            "LST" => Command::Lst,
            "HLP" => Command::Hlp,
            "CLS" => Command::Cls,
            _ => return Err(CommandError::Unrecognized(keyword)),
        };

        Ok(Some(command))
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Add { .. } => "ADD",
            Command::Del(_) => "DEL",
            Command::Cmp(_, _) => "CMP",
            Command::Lst => "LST",
            Command::Hlp => "HLP",
            Command::Cls => "CLS",
        }
    }
}

/// Usage lines shown by the banner and `HLP`.
pub const USAGE: [&str; 6] = [
    "ADD <Name> <Surname> <Time hh:mm:ss:mmm> - adds new entry with a new member",
    "DEL <ID> - remove a race member",
    "CMP <ID> <ID> - compares two race members",
    "LST - list all race members",
    "HLP - show this list of commands",
    "CLS - close the program",
];

fn expect_arity(tokens: &[&str], expected: usize) -> Result<()> {
    if tokens.len() != expected {
        return Err(CommandError::Arity {
            expected,
            actual: tokens.len(),
        });
    }
    Ok(())
}

fn parse_id(token: &str) -> Result<u32> {
    token
        .parse()
        .map_err(|_| CommandError::InvalidId(token.to_string()))
}
