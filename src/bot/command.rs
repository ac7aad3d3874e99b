//! Prefix command parsing.

/// A recognised chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Register,
    Verify(Option<String>),
    AddEmail(Option<String>),
}

impl Command {
    /// Parses `content` as `<prefix><name> [argument]`.
    ///
    /// The name must directly follow the prefix and is matched case-insensitively; the
    /// argument is the first whitespace-separated token after the name. Returns `None` for anything that is
    /// not one of the bot's commands.
    pub fn parse(prefix: &str, content: &str) -> Option<Self> {
        let rest = content.trim_start().strip_prefix(prefix)?;
        if rest.starts_with(char::is_whitespace) {
            return None;
        }

        let mut parts = rest.split_whitespace();
        let name = parts.next()?.to_lowercase();
        let argument = parts.next().map(str::to_string);

        match name.as_str() {
            "register" => Some(Self::Register),
            "verify" => Some(Self::Verify(argument)),
            "addemail" => Some(Self::AddEmail(argument)),
            _ => None,
        }
    }
}
