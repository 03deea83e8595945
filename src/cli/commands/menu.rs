use super::{CommandHandler, CommandResult};
use crate::catalog::Catalog;
use crate::cli::app::OutputFormat;
use crate::cli::render;
use crate::Result;
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use tracing::debug;

/// Handler for the `menu` command, reading choices from stdin
pub struct MenuCommand;

impl CommandHandler for MenuCommand {
    fn execute(&self, catalog: &mut Catalog, out: &mut dyn Write) -> Result<CommandResult> {
        let stdin = io::stdin();
        MenuSession::new(stdin.lock(), out).run(catalog)?;
        Ok(CommandResult::Success(None))
    }

    fn name(&self) -> &'static str {
        "menu"
    }
}

/// Entries of the main menu, numbered from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Add,
    Delete,
    Search,
    List,
    UpdateStatus,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Add,
        MenuAction::Delete,
        MenuAction::Search,
        MenuAction::List,
        MenuAction::UpdateStatus,
        MenuAction::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Add => "Add a book",
            MenuAction::Delete => "Delete a book",
            MenuAction::Search => "Search for books",
            MenuAction::List => "List all books",
            MenuAction::UpdateStatus => "Change book status",
            MenuAction::Exit => "Exit",
        }
    }

    /// Parse a menu number as typed by the user
    pub fn from_choice(choice: &str) -> Option<Self> {
        let index: usize = choice.trim().parse().ok()?;
        Self::ALL.get(index.checked_sub(1)?).copied()
    }
}

/// Interactive loop over any line-based input and output
pub struct MenuSession<R, W> {
    input: R,
    output: W,
}

type Step = ControlFlow<()>;

impl<R: BufRead, W: Write> MenuSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Run until the user exits or input ends
    pub fn run(&mut self, catalog: &mut Catalog) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.prompt("Enter action number: ")? else {
                writeln!(self.output)?;
                break;
            };

            let step = match MenuAction::from_choice(&choice) {
                Some(action) => {
                    debug!(?action, "Menu action selected");
                    self.dispatch(action, catalog)?
                }
                None => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    Step::Continue(())
                }
            };

            if step.is_break() {
                break;
            }
        }
        Ok(())
    }

    /// Give back the input and output
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn dispatch(&mut self, action: MenuAction, catalog: &mut Catalog) -> Result<Step> {
        match action {
            MenuAction::Add => self.add(catalog),
            MenuAction::Delete => self.delete(catalog),
            MenuAction::Search => self.search(catalog),
            MenuAction::List => self.list(catalog),
            MenuAction::UpdateStatus => self.update_status(catalog),
            MenuAction::Exit => {
                writeln!(self.output, "Exiting.")?;
                Ok(Step::Break(()))
            }
        }
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nAvailable actions:")?;
        for (number, action) in MenuAction::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", number + 1, action.label())?;
        }
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompt for a book id. `Continue(None)` means the input was not an id.
    fn read_id(&mut self, label: &str) -> Result<ControlFlow<(), Option<u64>>> {
        let Some(line) = self.prompt(label)? else {
            return Ok(ControlFlow::Break(()));
        };
        match line.parse::<u64>() {
            Ok(id) => Ok(ControlFlow::Continue(Some(id))),
            Err(_) => {
                writeln!(self.output, "ID must be a positive integer.")?;
                Ok(ControlFlow::Continue(None))
            }
        }
    }

    fn add(&mut self, catalog: &mut Catalog) -> Result<Step> {
        let Some(title) = self.prompt("Enter book title: ")? else {
            return Ok(Step::Break(()));
        };
        let Some(author) = self.prompt("Enter book author: ")? else {
            return Ok(Step::Break(()));
        };
        let Some(year) = self.prompt("Enter publication year: ")? else {
            return Ok(Step::Break(()));
        };

        if title.is_empty() {
            writeln!(self.output, "Title cannot be empty.")?;
            return Ok(Step::Continue(()));
        }
        if author.is_empty() {
            writeln!(self.output, "Author cannot be empty.")?;
            return Ok(Step::Continue(()));
        }
        let Ok(year) = year.parse::<i32>() else {
            writeln!(self.output, "Year must be an integer.")?;
            return Ok(Step::Continue(()));
        };

        let book = catalog.add(&title, &author, year)?;
        writeln!(self.output, "{}", render::added(&book))?;
        Ok(Step::Continue(()))
    }

    fn delete(&mut self, catalog: &mut Catalog) -> Result<Step> {
        let id = match self.read_id("Enter ID of the book to delete: ")? {
            ControlFlow::Break(()) => return Ok(Step::Break(())),
            ControlFlow::Continue(None) => return Ok(Step::Continue(())),
            ControlFlow::Continue(Some(id)) => id,
        };

        let message = if catalog.delete(id)? {
            render::deleted(id)
        } else {
            render::not_found(id)
        };
        writeln!(self.output, "{}", message)?;
        Ok(Step::Continue(()))
    }

    fn search(&mut self, catalog: &mut Catalog) -> Result<Step> {
        let Some(field) = self.prompt("Enter field to search (id, title, author, year, status): ")?
        else {
            return Ok(Step::Break(()));
        };
        let Some(value) = self.prompt("Enter value to search for: ")? else {
            return Ok(Step::Break(()));
        };

        let books = catalog.search(&field, &value);
        render::write_books(&mut self.output, &books, OutputFormat::Text, render::NO_RESULTS)?;
        Ok(Step::Continue(()))
    }

    fn list(&mut self, catalog: &mut Catalog) -> Result<Step> {
        let books: Vec<_> = catalog.list().iter().collect();
        render::write_books(
            &mut self.output,
            &books,
            OutputFormat::Text,
            render::EMPTY_LIBRARY,
        )?;
        Ok(Step::Continue(()))
    }

    fn update_status(&mut self, catalog: &mut Catalog) -> Result<Step> {
        let id = match self.read_id("Enter ID of the book: ")? {
            ControlFlow::Break(()) => return Ok(Step::Break(())),
            ControlFlow::Continue(None) => return Ok(Step::Continue(())),
            ControlFlow::Continue(Some(id)) => id,
        };
        let Some(status) = self.prompt("Enter new status (Available or CheckedOut): ")? else {
            return Ok(Step::Break(()));
        };

        match catalog.update_status(id, &status) {
            Ok(book) => writeln!(self.output, "{}", render::status_updated(&book))?,
            Err(e) if e.is_user_error() => writeln!(self.output, "{}.", e)?,
            Err(e) => return Err(e),
        }
        Ok(Step::Continue(()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Status;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn run_session(catalog: &mut Catalog, script: &str) -> String {
        let mut session = MenuSession::new(Cursor::new(script.to_string()), Vec::<u8>::new());
        session.run(catalog).unwrap();
        let (_, output) = session.into_inner();
        String::from_utf8(output).unwrap()
    }

    fn open_catalog(temp_dir: &TempDir) -> Catalog {
        Catalog::open(temp_dir.path().join("library.json"))
    }

    #[test]
    fn test_menu_choices() {
        assert_eq!(MenuAction::from_choice("1"), Some(MenuAction::Add));
        assert_eq!(MenuAction::from_choice(" 6 "), Some(MenuAction::Exit));
        assert_eq!(MenuAction::from_choice("0"), None);
        assert_eq!(MenuAction::from_choice("7"), None);
        assert_eq!(MenuAction::from_choice("add"), None);
    }

    #[test]
    fn test_exit_immediately() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&temp_dir);

        let output = run_session(&mut catalog, "6\n");

        assert!(output.contains("1. Add a book"));
        assert!(output.contains("6. Exit"));
        assert!(output.ends_with("Exiting.\n"));
    }

    #[test]
    fn test_end_of_input_stops_loop() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&temp_dir);

        let output = run_session(&mut catalog, "4\n");
        assert!(output.contains(render::EMPTY_LIBRARY));
        assert!(!output.contains("Exiting."));
    }

    #[test]
    fn test_add_then_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&temp_dir);

        let output = run_session(&mut catalog, "1\nWar and Peace\nTolstoy\n1869\n4\n6\n");

        assert!(output.contains("Book with ID 1 added."));
        assert!(output.contains(
            "ID: 1, Title: War and Peace, Author: Tolstoy, Year: 1869, Status: Available"
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_add_with_bad_year_continues() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&temp_dir);

        let output = run_session(&mut catalog, "1\nWar and Peace\nTolstoy\nlong ago\n6\n");

        assert!(output.contains("Year must be an integer."));
        assert!(output.contains("Exiting."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_with_empty_title() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&temp_dir);

        let output = run_session(&mut catalog, "1\n\nTolstoy\n1869\n6\n");

        assert!(output.contains("Title cannot be empty."));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_invalid_choice() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&temp_dir);

        let output = run_session(&mut catalog, "9\n6\n");
        assert!(output.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn test_search_delete_and_status() {
        let temp_dir = TempDir::new().unwrap();
        let mut catalog = open_catalog(&temp_dir);
        catalog.add("War and Peace", "Tolstoy", 1869).unwrap();
        catalog.add("Dead Souls", "Gogol", 1842).unwrap();

        let output = run_session(
            &mut catalog,
            "3\nauthor\ngogol\n5\n1\nchecked out\n5\n1\nlost\n2\n9\n2\nabc\n2\n2\n3\ntitle\ndead souls\n6\n",
        );

        assert!(output.contains("ID: 2, Title: Dead Souls, Author: Gogol"));
        assert!(output.contains("Status of book with ID 1 updated to CheckedOut."));
        assert!(output.contains("Invalid status 'lost'"));
        assert!(output.contains("Book with ID 9 not found."));
        assert!(output.contains("ID must be a positive integer."));
        assert!(output.contains("Book with ID 2 deleted."));
        assert!(output.contains(render::NO_RESULTS));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(1).unwrap().status, Status::CheckedOut);
    }
}
