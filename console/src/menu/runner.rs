use crate::input::{parse, Prompter};
use crate::menu::config::ConsoleConfig;
use matcore::algebra::render;
use matcore::prelude::Slot;
use matcore::{Matrix, Session};
use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Input,
    Transpose,
    Multiply,
    Print,
    Quit,
}

impl MenuChoice {
    fn from_index(index: i64) -> Option<Self> {
        match index {
            1 => Some(MenuChoice::Input),
            2 => Some(MenuChoice::Transpose),
            3 => Some(MenuChoice::Multiply),
            4 => Some(MenuChoice::Print),
            5 => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

/// Drives the interactive menu: one turn runs to completion before the
/// next line is read, and every engine error comes back to the menu as
/// a printed line rather than an abort.
pub struct MenuRunner<R, W> {
    session: Session,
    config: ConsoleConfig,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> MenuRunner<R, W> {
    pub fn new(config: ConsoleConfig, reader: R, writer: W) -> Self {
        Self {
            session: Session::new(),
            config,
            prompter: Prompter::new(reader, writer),
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            self.print_menu()?;
            let line = match self.prompter.read_line()? {
                Some(line) => line,
                None => break,
            };
            let choice = parse::parse_integer(line.trim()).and_then(MenuChoice::from_index);
            match choice {
                Some(MenuChoice::Input) => self.handle_input()?,
                Some(MenuChoice::Transpose) => self.handle_transpose()?,
                Some(MenuChoice::Multiply) => self.handle_multiply()?,
                Some(MenuChoice::Print) => self.handle_print()?,
                Some(MenuChoice::Quit) => {
                    let snapshot = self.session.metrics();
                    writeln!(
                        self.prompter.writer(),
                        "Session summary -> fills {}, transposes {}, multiplies {}, rejections {}",
                        snapshot.fills,
                        snapshot.transposes,
                        snapshot.multiplies,
                        snapshot.rejections
                    )?;
                    writeln!(self.prompter.writer(), "\nBye!")?;
                    break;
                }
                None => writeln!(self.prompter.writer(), "Please enter a valid input.")?,
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> io::Result<()> {
        let writer = self.prompter.writer();
        writeln!(writer)?;
        writeln!(writer, "******************************")?;
        writeln!(writer, "*   Linear Algebra Library   *")?;
        writeln!(writer, "******************************")?;
        writeln!(writer, "*  Please choose an option.  *")?;
        writeln!(writer, "*  1. Input matrix           *")?;
        writeln!(writer, "*  2. Transpose matrix       *")?;
        writeln!(writer, "*  3. Matrix multiplication  *")?;
        writeln!(writer, "*  4. Print matrix           *")?;
        writeln!(writer, "*  5. Quit                   *")?;
        writeln!(writer, "******************************")?;
        writeln!(writer)
    }

    fn handle_input(&mut self) -> anyhow::Result<()> {
        let slot = match self
            .prompter
            .ask_slot("\nWould you like to input matrix A or B?")?
        {
            Some(slot) => slot,
            None => return Ok(()),
        };
        let height = match self
            .prompter
            .ask_dimension("Height", self.config.max_dimension)?
        {
            Some(height) => height,
            None => return Ok(()),
        };
        let width = match self
            .prompter
            .ask_dimension("Width", self.config.max_dimension)?
        {
            Some(width) => width,
            None => return Ok(()),
        };

        writeln!(
            self.prompter.writer(),
            "Please enter each row as {} numbers separated by spaces.",
            width
        )?;
        let mut rows = Vec::with_capacity(height);
        for index in 0..height {
            match self.prompter.ask_row(index, width)? {
                Some(row) => rows.push(row),
                None => return Ok(()),
            }
        }

        match Matrix::from_rows(height, width, rows) {
            Ok(matrix) => {
                self.session.set(slot, matrix);
                writeln!(self.prompter.writer(), "Matrix {} stored.", slot)?;
            }
            Err(err) => writeln!(self.prompter.writer(), "{}", err)?,
        }
        Ok(())
    }

    fn handle_transpose(&mut self) -> anyhow::Result<()> {
        let slot = match self
            .prompter
            .ask_slot("\nWhich matrix would you like to transpose, A or B?")?
        {
            Some(slot) => slot,
            None => return Ok(()),
        };
        match self.session.transpose(slot) {
            Ok(_) => {
                writeln!(self.prompter.writer(), "Matrix {} transposed:", slot)?;
                self.print_slot(slot)?;
            }
            Err(err) => writeln!(self.prompter.writer(), "{}", err)?,
        }
        Ok(())
    }

    fn handle_multiply(&mut self) -> anyhow::Result<()> {
        // The order is an explicit user choice; the engine validates
        // exactly the order presented and never swaps the operands.
        let first = match self
            .prompter
            .ask_slot("\nWhich matrix should be the left operand, A or B?")?
        {
            Some(slot) => slot,
            None => return Ok(()),
        };
        let second = match first {
            Slot::A => Slot::B,
            Slot::B => Slot::A,
        };

        match self.session.multiply(first, second) {
            Ok(product) => {
                writeln!(self.prompter.writer(), "Matrix {} * matrix {}:", first, second)?;
                let writer = self.prompter.writer();
                for line in render(Some(&product), &self.config.delimiter) {
                    writeln!(writer, "{}", line)?;
                }
            }
            Err(err) => writeln!(self.prompter.writer(), "{}", err)?,
        }
        Ok(())
    }

    fn handle_print(&mut self) -> anyhow::Result<()> {
        let slot = match self
            .prompter
            .ask_slot("\nWhich matrix would you like to print, A or B?")?
        {
            Some(slot) => slot,
            None => return Ok(()),
        };
        self.print_slot(slot)?;
        Ok(())
    }

    fn print_slot(&mut self, slot: Slot) -> io::Result<()> {
        let writer = self.prompter.writer();
        for line in render(self.session.get(slot), &self.config.delimiter) {
            writeln!(writer, "{}", line)?;
        }
        Ok(())
    }
}
