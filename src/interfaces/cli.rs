use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ce")]
#[command(about = "Look up countries and keep a list of favourites.")]
#[command(version)]
pub struct Cli {
    /// Output the country record as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose color theme (classic, ocean, canvas, plain)
    #[arg(short = 'T', long)]
    pub theme: Option<String>,

    /// Add or remove the searched country from favourites
    #[arg(short = 'f', long, conflicts_with = "json")]
    pub toggle: bool,

    /// Add a name to favourites
    #[arg(short = 'a', long, value_name = "NAME")]
    pub add: Option<String>,

    /// Remove a name from favourites
    #[arg(short = 'r', long, value_name = "NAME")]
    pub remove: Option<String>,

    /// List favourites
    #[arg(short = 'l', long)]
    pub favourites: bool,

    /// Start an interactive session
    #[arg(short = 'i', long)]
    pub interactive: bool,

    /// Generate config sample
    #[arg(long)]
    pub generate_config: bool,

    /// Show status
    #[arg(long)]
    pub status: bool,

    /// Country name
    #[arg(num_args = 1..)]
    pub query: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multi_word_query() {
        let cli = Cli::try_parse_from(["ce", "United", "Kingdom", "--toggle"]).unwrap();
        assert_eq!(cli.query.join(" "), "United Kingdom");
        assert!(cli.toggle);
        assert!(!cli.json);
    }

    #[test]
    fn test_favourite_flags() {
        let cli = Cli::try_parse_from(["ce", "-a", "France", "-l"]).unwrap();
        assert_eq!(cli.add.as_deref(), Some("France"));
        assert!(cli.favourites);
        assert!(cli.query.is_empty());
    }

    #[test]
    fn test_toggle_conflicts_with_json() {
        let err = Cli::try_parse_from(["ce", "France", "--toggle", "--json"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);

        assert!(Cli::try_parse_from(["ce", "France", "--json"]).is_ok());
    }
}
