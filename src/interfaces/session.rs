/// One line typed into the interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Search(String),
    Toggle,
    ListFavourites,
    Add(String),
    Remove(String),
    /// Search for the n-th favourite (1-based).
    Open(usize),
    Help,
    Quit,
    Blank,
    Unknown(String),
}

pub const SESSION_HELP: &str = "\
Type a country name to search. Commands:
  :fav          add or remove the displayed country from favourites
  :favs         list favourites
  :add <name>   add a name to favourites
  :rm <name>    remove a name from favourites
  :open <n>     search for favourite number n
  :help         show this help
  :quit         leave the session";

impl SessionCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return SessionCommand::Blank;
        }

        let Some(command) = line.strip_prefix(':') else {
            return SessionCommand::Search(line.to_string());
        };

        let (verb, arg) = match command.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (command, ""),
        };

        match (verb, arg) {
            ("q" | "quit" | "exit", _) => SessionCommand::Quit,
            ("h" | "help", _) => SessionCommand::Help,
            ("fav", "") => SessionCommand::Toggle,
            ("favs" | "list", _) => SessionCommand::ListFavourites,
            ("add", name) if !name.is_empty() => SessionCommand::Add(name.to_string()),
            ("rm" | "remove", name) if !name.is_empty() => SessionCommand::Remove(name.to_string()),
            ("open", n) => match n.parse::<usize>() {
                Ok(n) if n > 0 => SessionCommand::Open(n),
                _ => SessionCommand::Unknown(line.to_string()),
            },
            _ => SessionCommand::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_search() {
        assert_eq!(
            SessionCommand::parse("  South Africa "),
            SessionCommand::Search("South Africa".to_string())
        );
        assert_eq!(SessionCommand::parse("   "), SessionCommand::Blank);
    }

    #[test]
    fn test_commands() {
        assert_eq!(SessionCommand::parse(":fav"), SessionCommand::Toggle);
        assert_eq!(SessionCommand::parse(":favs"), SessionCommand::ListFavourites);
        assert_eq!(SessionCommand::parse(":q"), SessionCommand::Quit);
        assert_eq!(
            SessionCommand::parse(":add  New Zealand"),
            SessionCommand::Add("New Zealand".to_string())
        );
        assert_eq!(
            SessionCommand::parse(":rm France"),
            SessionCommand::Remove("France".to_string())
        );
        assert_eq!(SessionCommand::parse(":open 2"), SessionCommand::Open(2));
    }

    #[test]
    fn test_bad_commands() {
        assert!(matches!(SessionCommand::parse(":open 0"), SessionCommand::Unknown(_)));
        assert!(matches!(SessionCommand::parse(":add"), SessionCommand::Unknown(_)));
        assert!(matches!(SessionCommand::parse(":launch"), SessionCommand::Unknown(_)));
    }
}
