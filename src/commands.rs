//! Parsing of the interactive CLI's input lines.

use crate::controller::Action;
use crate::error::PlannerError;

pub const HELP: &str = "\
Commands:
  search <query>        search recipes
  page <n>              show page n of the results
  open <id>             show recipe <id>
  inc | dec             change servings
  add                   add the recipe's ingredients to the shopping list
  count <item> <value>  change a shopping list count (0 removes the item)
  del <item>            remove a shopping list item
  like                  like or unlike the current recipe
  list                  show the shopping list
  likes                 show liked recipes
  help                  show this help
  quit                  leave";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Action(Action),
    ShowList,
    ShowLikes,
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command(line: &str) -> Result<Option<Command>, PlannerError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_lowercase().as_str() {
        "search" | "s" => Command::Action(Action::Search {
            query: required(rest, "search <query>")?.to_string(),
        }),
        "page" | "p" => {
            let page: usize = required(rest, "page <n>")?
                .parse()
                .map_err(|_| PlannerError::Validation(format!("not a page number: {}", rest)))?;
            Command::Action(Action::GoToPage(page))
        }
        "open" | "o" => {
            let id = required(rest, "open <id>")?;
            Command::Action(Action::FragmentChanged(format!("#{}", id)))
        }
        "inc" | "+" => Command::Action(Action::IncreaseServings),
        "dec" | "-" => Command::Action(Action::DecreaseServings),
        "add" => Command::Action(Action::AddToList),
        "count" => {
            let (id, value) = required(rest, "count <item> <value>")?
                .split_once(char::is_whitespace)
                .ok_or_else(|| usage("count <item> <value>"))?;
            Command::Action(Action::UpdateListCount {
                id: id.to_string(),
                value: value.trim().to_string(),
            })
        }
        "del" | "delete" => Command::Action(Action::DeleteListItem {
            id: required(rest, "del <item>")?.to_string(),
        }),
        "like" => Command::Action(Action::ToggleLike),
        "list" => Command::ShowList,
        "likes" => Command::ShowLikes,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(PlannerError::Validation(format!(
                "unknown command: {} (try 'help')",
                other
            )))
        }
    };
    Ok(Some(command))
}

fn required<'a>(rest: &'a str, usage_text: &str) -> Result<&'a str, PlannerError> {
    if rest.is_empty() {
        Err(usage(usage_text))
    } else {
        Ok(rest)
    }
}

fn usage(text: &str) -> PlannerError {
    PlannerError::Validation(format!("usage: {}", text))
}
