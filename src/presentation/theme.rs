use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub value: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub link: fn(&str) -> String,
    pub fav: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "classic" | "" => Self::classic(),
            "ocean" => Self::ocean(),
            "canvas" => Self::canvas(),
            "plain" => Self::plain(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::classic()
            }
        }
    }

    fn classic() -> Self {
        Self {
            title: |s| s.bright_magenta().bold().underline().to_string(),
            label: |s| s.cyan().to_string(),
            value: |s| s.white().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            link: |s| s.bright_black().italic().to_string(),
            fav: |s| s.yellow().bold().to_string(),
        }
    }

    fn ocean() -> Self {
        Self {
            title: |s| s.bright_blue().bold().underline().to_string(),
            label: |s| s.bright_cyan().to_string(),
            value: |s| s.bright_white().to_string(),
            line: |s| s.blue().dimmed().to_string(),
            idx: |s| s.cyan().to_string(),
            link: |s| s.blue().italic().to_string(),
            fav: |s| s.bright_yellow().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            label: |s| s.bright_cyan().bold().to_string(),
            value: |s| s.black().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.cyan().to_string(),
            link: |s| s.bright_black().italic().to_string(),
            fav: |s| s.red().bold().to_string(),
        }
    }

    fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            label: |s| s.to_string(),
            value: |s| s.to_string(),
            line: |s| s.to_string(),
            idx: |s| s.to_string(),
            link: |s| s.to_string(),
            fav: |s| s.to_string(),
        }
    }
}
