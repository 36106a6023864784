//! Line command parsing.
//!
//! Each line typed at the prompt maps to one [`Command`]. Most commands wrap an
//! [`Event`] for the handler; the rest are handled by the driver loop.

use crate::app::Event;
use crate::domain::error::{DirectoryError, Result};
use crate::domain::{ConsultationMode, SortKey};

/// Usage text printed by `help`.
pub const HELP: &str = "\
Commands:
  search <term>                    set the name filter (empty clears it)
  clear                            clear the name filter
  toggle <speciality>              select or deselect a speciality
  mode <video|inClinic|any>        set the consultation mode
  sort <fees|experience|none>      set the sort order
  pick <n>                         use suggestion n as the search term
  dismiss                          hide suggestions
  reload                           fetch the directory again
  show                             print the current listing
  help                             print this message
  quit                             exit
";

/// A parsed prompt line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Forward to [`handle_event`](crate::app::handle_event).
    Event(Event),
    /// Print the listing without changing anything.
    Show,
    /// Print [`HELP`].
    Help,
    /// Leave the loop.
    Quit,
}

/// Parses one prompt line.
///
/// The argument of `search` is kept verbatim apart from the single space that
/// separates it from the command word, so `search  a` searches for `" a"`.
///
/// # Errors
///
/// Returns [`DirectoryError::InvalidCommand`] for unknown commands and
/// malformed arguments.
///
/// # Example
///
/// ```rust
/// use docfinder::app::Event;
/// use docfinder::ui::{parse_command, Command};
///
/// let command = parse_command("pick 2")?;
/// assert_eq!(command, Command::Event(Event::SelectSuggestion(1)));
/// # Ok::<(), docfinder::DirectoryError>(())
/// ```
pub fn parse_command(line: &str) -> Result<Command> {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    let command = match word {
        "search" | "s" => Command::Event(Event::SetTerm(rest.to_string())),
        "clear" => Command::Event(Event::SetTerm(String::new())),
        "toggle" | "t" => {
            let category = rest.trim();
            if category.is_empty() {
                return Err(invalid("toggle needs a speciality"));
            }
            Command::Event(Event::ToggleCategory(category.to_string()))
        }
        "mode" | "m" => Command::Event(Event::SetMode(parse_mode(rest.trim())?)),
        "sort" => Command::Event(Event::SetSortKey(parse_sort(rest.trim())?)),
        "pick" | "p" => Command::Event(Event::SelectSuggestion(parse_pick(rest.trim())?)),
        "dismiss" => Command::Event(Event::DismissSuggestions),
        "reload" | "r" => Command::Event(Event::Reload),
        "show" | "" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(invalid(&format!("unknown command '{other}'"))),
    };

    Ok(command)
}

fn parse_mode(arg: &str) -> Result<String> {
    if arg.eq_ignore_ascii_case("any") || arg.eq_ignore_ascii_case("none") {
        return Ok(String::new());
    }
    ConsultationMode::parse(arg)
        .map(|mode| mode.as_str().to_string())
        .ok_or_else(|| invalid(&format!("unknown mode '{arg}'")))
}

fn parse_sort(arg: &str) -> Result<SortKey> {
    match arg {
        "none" | "off" => Ok(SortKey::Unsorted),
        other => match SortKey::from_param(other) {
            SortKey::Unsorted => Err(invalid(&format!("unknown sort '{other}'"))),
            key => Ok(key),
        },
    }
}

fn parse_pick(arg: &str) -> Result<usize> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(invalid("pick needs a suggestion number starting at 1")),
    }
}

fn invalid(message: &str) -> DirectoryError {
    DirectoryError::InvalidCommand(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(line: &str) -> Event {
        match parse_command(line).unwrap() {
            Command::Event(event) => event,
            other => panic!("expected an event for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn search_keeps_term_verbatim() {
        assert_eq!(event("search Dr. Ali"), Event::SetTerm("Dr. Ali".into()));
        assert_eq!(event("search  ali "), Event::SetTerm(" ali ".into()));
        assert_eq!(event("search"), Event::SetTerm(String::new()));
        assert_eq!(event("clear\n"), Event::SetTerm(String::new()));
    }

    #[test]
    fn toggle_requires_a_category() {
        assert_eq!(
            event("toggle General Physician"),
            Event::ToggleCategory("General Physician".into())
        );
        assert!(matches!(
            parse_command("toggle  "),
            Err(DirectoryError::InvalidCommand(_))
        ));
    }

    #[test]
    fn mode_accepts_known_modes_and_any() {
        assert_eq!(event("mode video"), Event::SetMode("video".into()));
        assert_eq!(event("mode INCLINIC"), Event::SetMode("inClinic".into()));
        assert_eq!(event("mode any"), Event::SetMode(String::new()));
        assert!(parse_command("mode phone").is_err());
    }

    #[test]
    fn sort_accepts_aliases_and_none() {
        assert_eq!(event("sort fees"), Event::SetSortKey(SortKey::FeeAscending));
        assert_eq!(
            event("sort experience-descending"),
            Event::SetSortKey(SortKey::ExperienceDescending)
        );
        assert_eq!(event("sort none"), Event::SetSortKey(SortKey::Unsorted));
        assert!(parse_command("sort name").is_err());
    }

    #[test]
    fn pick_is_one_based() {
        assert_eq!(event("pick 1"), Event::SelectSuggestion(0));
        assert!(parse_command("pick 0").is_err());
        assert!(parse_command("pick x").is_err());
    }

    #[test]
    fn driver_commands() {
        assert_eq!(parse_command("show").unwrap(), Command::Show);
        assert_eq!(parse_command("").unwrap(), Command::Show);
        assert_eq!(parse_command("help").unwrap(), Command::Help);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
        assert_eq!(event("reload"), Event::Reload);
        assert_eq!(event("dismiss"), Event::DismissSuggestions);
    }

    #[test]
    fn unknown_command_is_an_error() {
        let err = parse_command("frobnicate").unwrap_err();
        assert_eq!(err.to_string(), "Invalid command: unknown command 'frobnicate'");
    }
}
