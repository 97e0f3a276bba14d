//! Interactive menu loop.
//!
//! The session owns the expense list for the whole run. Each iteration shows
//! the current list and the menu, reads a choice and dispatches it to the
//! engine. Nothing is written to disk unless the user picks "Save".
use std::{
    io::{BufRead, Write},
    path::PathBuf,
};

use engine::{Expenses, Money};

use crate::error::Result;

const MENU: &str = "
        Menu of Options
        1) Add a new Expense
        2) Remove an existing Expense
        3) Save Data to File
        4) Calculate total Expenses
        5) Exit Program
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    Remove,
    Save,
    Total,
    Exit,
}

impl MenuChoice {
    /// Parses a menu selection, `None` for anything outside `1`-`5`.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::Remove),
            "3" => Some(Self::Save),
            "4" => Some(Self::Total),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<R, W> {
    input: R,
    output: W,
    data_file: PathBuf,
    expenses: Expenses,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, data_file: impl Into<PathBuf>, expenses: Expenses) -> Self {
        Self {
            input,
            output,
            data_file: data_file.into(),
            expenses,
        }
    }

    /// Loads the data file and builds a session on top of it.
    ///
    /// Tells the user when there was no file to load.
    pub fn open(input: R, mut output: W, data_file: impl Into<PathBuf>) -> Result<Self> {
        let data_file = data_file.into();
        let expenses = match Expenses::try_load(&data_file)? {
            Some(expenses) => expenses,
            None => {
                writeln!(output)?;
                writeln!(output, "File does not exist. There is no data to load!")?;
                writeln!(output)?;
                Expenses::new()
            }
        };
        Ok(Self::new(input, output, data_file, expenses))
    }

    pub fn expenses(&self) -> &Expenses {
        &self.expenses
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        while self.step()? == Flow::Continue {}
        self.output.flush()?;
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        self.show_expenses()?;
        writeln!(self.output, "{MENU}")?;

        let Some(raw) = self.read_line("Which option would you like to perform? [1 to 5] - ")?
        else {
            return self.exit();
        };
        writeln!(self.output)?;

        let Some(choice) = MenuChoice::parse(&raw) else {
            tracing::warn!("invalid menu selection: {:?}", raw.trim());
            writeln!(self.output, "Menu selection must be 1 - 5")?;
            writeln!(self.output)?;
            return Ok(Flow::Continue);
        };

        match choice {
            MenuChoice::Add => {
                let Some((name, amount)) = self.prompt_expense()? else {
                    return self.exit();
                };
                self.expenses.add(name, amount);
            }
            MenuChoice::Remove => {
                let Some(name) =
                    self.read_line("Enter the name of the Expense you would like to remove: ")?
                else {
                    return self.exit();
                };
                writeln!(self.output)?;
                self.expenses.remove(&name);
            }
            MenuChoice::Save => {
                self.expenses.save(&self.data_file)?;
                writeln!(self.output, "Data Saved!")?;
                writeln!(self.output)?;
            }
            MenuChoice::Total => {
                writeln!(
                    self.output,
                    "The sum of all expenses is: ${}",
                    self.expenses.total()
                )?;
                writeln!(self.output)?;
            }
            MenuChoice::Exit => return self.exit(),
        }

        Ok(Flow::Continue)
    }

    fn exit(&mut self) -> Result<Flow> {
        writeln!(self.output, "Goodbye!")?;
        Ok(Flow::Exit)
    }

    fn show_expenses(&mut self) -> Result<()> {
        writeln!(self.output, "******* The current expenses are: *******")?;
        for expense in &self.expenses {
            writeln!(self.output, "{expense}")?;
        }
        writeln!(self.output, "*******************************************")?;
        writeln!(self.output)?;
        Ok(())
    }

    /// Asks for a name and an amount until the amount parses.
    fn prompt_expense(&mut self) -> Result<Option<(String, Money)>> {
        loop {
            let Some(name) = self.read_line("Enter an Expense to add: ")? else {
                return Ok(None);
            };
            let Some(raw_amount) = self.read_line("Enter the dollar amount of the Expense: ")?
            else {
                return Ok(None);
            };

            match raw_amount.parse::<Money>() {
                Ok(amount) => {
                    writeln!(self.output)?;
                    return Ok(Some((name, amount)));
                }
                Err(err) => {
                    tracing::debug!("rejected amount: {err}");
                    writeln!(self.output)?;
                    writeln!(
                        self.output,
                        "Expense not added. Please enter a number [12.34] for the amount."
                    )?;
                    writeln!(self.output)?;
                }
            }
        }
    }

    /// Prints `prompt` and reads one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}
