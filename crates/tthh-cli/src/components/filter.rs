use tthh_core::{format_deletion, format_input};

/// Show what a date field turns typed text into
#[derive(clap::Args, Debug)]
#[command(version, about, long_about = None)]
pub struct FilterArgs {
    /// Raw text of a change event
    pub text: String,

    /// Shape the text as after a deletion, without adding slashes
    #[arg(long, short)]
    pub deletion: bool,
}

impl FilterArgs {
    pub fn run(&self) -> String {
        if self.deletion {
            format_deletion(&self.text)
        } else {
            format_input(&self.text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_adds_slashes() {
        let args = FilterArgs {
            text: "15/05".to_string(),
            deletion: false,
        };
        assert_eq!(args.run(), "15/05/");
    }

    #[test]
    fn test_deletion_keeps_text_as_is() {
        let args = FilterArgs {
            text: "15/05".to_string(),
            deletion: true,
        };
        assert_eq!(args.run(), "15/05");
    }
}
