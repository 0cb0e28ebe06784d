//! The interactive command loop: generate puzzles, show their solutions and save them to files.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    error::{Error, Result},
    placement::DiagonalBounds,
    puzzle::{Puzzle, PuzzleConfig},
    words,
};

/// A command typed at the session prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Enter words one by one and generate a puzzle from them.
    Generate,

    /// Generate a puzzle from a word list file.
    GenerateFromFile,

    /// Print the solution of the current puzzle.
    ShowSolution,

    /// Save the current puzzle to a file.
    SavePuzzle,

    /// Save the solution of the current puzzle to a file.
    SaveSolution,

    /// Leave the session.
    Quit,
}

impl Command {
    /// Parses a command from the first character of a line, ignoring case. Returns `None` for
    /// blank lines and unknown commands.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().chars().next()?.to_ascii_lowercase() {
            'g' => Some(Command::Generate),
            'i' => Some(Command::GenerateFromFile),
            's' => Some(Command::ShowSolution),
            'o' => Some(Command::SavePuzzle),
            'p' => Some(Command::SaveSolution),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "\
'g' - generate a new word search
'i' - generate word search from file
's' - get solution to word search
'o' - output word search to file
'p' - output word search solution to file
'q' - quit the program
";

/// An interactive session reading commands from `input` and writing to `output`.
///
/// At most one puzzle is active at a time. Generating a new one discards the previous puzzle.
pub struct Session<I, O, R> {
    input: I,
    output: O,
    rng: R,
    diagonal_bounds: DiagonalBounds,
    puzzle: Option<Puzzle>,
}

impl<I: BufRead, O: Write, R: Rng> Session<I, O, R> {
    /// Creates a session with no active puzzle.
    pub fn new(input: I, output: O, rng: R) -> Self {
        Self {
            input,
            output,
            rng,
            diagonal_bounds: DiagonalBounds::default(),
            puzzle: None,
        }
    }

    /// Sets how far diagonal words may reach in generated puzzles.
    pub fn with_diagonal_bounds(mut self, diagonal_bounds: DiagonalBounds) -> Self {
        self.diagonal_bounds = diagonal_bounds;
        self
    }

    /// The active puzzle, if one has been generated.
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    /// Consumes the session, returning its output sink.
    pub fn into_output(self) -> O {
        self.output
    }

    /// Runs commands until `q` or the end of input. Only failures to read input or write output end
    /// the session early; every other problem is reported and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Welcome to the Word Search Generator!")?;
        writeln!(self.output, "Here are the allowed commands: ")?;

        loop {
            write!(self.output, "{}Please enter a command: ", HELP)?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                break;
            };

            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Some(Command::Quit) => {
                    writeln!(self.output, "\nQuitting the program. Goodbye!\n")?;
                    break;
                }
                Some(command) => self.execute(command)?,
                None => writeln!(self.output, "\nInvalid command. Please try again.\n")?,
            }
        }

        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Generate => {
                writeln!(self.output, "\nPlease enter words one by one.")?;
                writeln!(self.output, "Enter '{}' to stop.\n", words::STOP_WORD)?;

                let raw = words::gather_words(&mut self.input)?;
                self.generate(&raw)?;
            }
            Command::GenerateFromFile => {
                write!(self.output, "\nWhat is the file name? ")?;
                self.output.flush()?;

                let file_name = self.read_line()?.unwrap_or_default();
                match words::read_word_list(file_name.trim()) {
                    Ok(raw) => self.generate(&raw)?,
                    Err(e) => {
                        log::debug!("{}", e);
                        writeln!(self.output, "\nFile not found. Try another command.\n")?;
                    }
                }
            }
            Command::ShowSolution => match &self.puzzle {
                Some(puzzle) => write!(self.output, "\n{}\n", puzzle.solution())?,
                None => writeln!(self.output, "\nNo word search to solve. Try another command.\n")?,
            },
            Command::SavePuzzle | Command::SaveSolution => self.save(command)?,
            Command::Quit => {}
        }

        Ok(())
    }

    fn generate(&mut self, raw: &[String]) -> Result<()> {
        let config = PuzzleConfig {
            words: raw,
            diagonal_bounds: self.diagonal_bounds,
        };
        let puzzle = Puzzle::generate(&config, &mut self.rng);

        writeln!(self.output, "{}", puzzle.display())?;
        if !puzzle.is_complete() {
            writeln!(
                self.output,
                "Could not fit these words: {}\n",
                puzzle.unplaced().join(", ")
            )?;
        }

        self.puzzle = Some(puzzle);
        Ok(())
    }

    fn save(&mut self, command: Command) -> Result<()> {
        let (grid, what) = match &self.puzzle {
            Some(puzzle) if command == Command::SavePuzzle => {
                (puzzle.display().clone(), "Word search")
            }
            Some(puzzle) => (puzzle.solution().clone(), "Word search solution"),
            None => {
                writeln!(self.output, "\nNo word search to output. Try another command.\n")?;
                return Ok(());
            }
        };

        write!(self.output, "\nWhat's the file name you would like to use? ")?;
        self.output.flush()?;

        let file_name = self.read_line()?.unwrap_or_default();
        match grid.write_to_file(file_name.trim()) {
            Ok(()) => writeln!(self.output, "\n{} printed to file.\n", what)?,
            Err(e @ Error::Io { .. }) => {
                log::debug!("{}", e);
                writeln!(self.output, "\nFile could not be created. Try another command.\n")?;
            }
            Err(e) => return Err(e),
        }

        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();

        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
    }
}
