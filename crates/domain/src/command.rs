use crate::{DomainName, RecordType};

/// One line of a resolver command file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Resolve {
        name: DomainName,
        record_type: RecordType,
    },
    PrintCache,
    Quit,
    /// Known verb with unusable arguments.
    Invalid { line: String, reason: String },
    Unknown(String),
}

impl Command {
    /// Parses a trimmed command line. Returns `None` for blank lines.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let verb = tokens.next()?;
        let args: Vec<&str> = tokens.collect();

        let command = match (verb, args.as_slice()) {
            ("quit", _) => Command::Quit,
            ("print", ["cache"]) => Command::PrintCache,
            ("resolve", [domain, record_type]) => Self::parse_resolve(line, domain, record_type),
            ("resolve", _) => Command::Invalid {
                line: line.trim().to_string(),
                reason: "usage: resolve <domain> <type>".to_string(),
            },
            _ => Command::Unknown(line.trim().to_string()),
        };
        Some(command)
    }

    fn parse_resolve(line: &str, domain: &str, record_type: &str) -> Self {
        let name = match domain.parse::<DomainName>() {
            Ok(name) => name,
            Err(e) => {
                return Command::Invalid {
                    line: line.trim().to_string(),
                    reason: e.to_string(),
                }
            }
        };
        match record_type.parse::<RecordType>() {
            Ok(record_type) => Command::Resolve { name, record_type },
            Err(reason) => Command::Invalid {
                line: line.trim().to_string(),
                reason,
            },
        }
    }
}
