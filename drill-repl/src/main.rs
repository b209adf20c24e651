mod args;
mod error;

use args::Args;
use drill_quiz::{Family, Generator, Mode, Outcome, Session};
use rand::rngs::StdRng;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{io::{self, BufRead, IsTerminal}, process::ExitCode};
use tracing::Level;

const HELP: &str = "\
commands:
  1-4              pick an option (multiple-choice mode)
  <answer>         type an answer (typed mode), such as (x+2)(x-3) or x^2 - 1/4
  :family <tag>    switch to square-binomial, diff-of-squares, linear-product, or general-product
  :expand          practice expanding products
  :factor          practice factoring
  :restart         start counting correct answers from zero
  :quit            leave the drill";

/// Installs the log subscriber on stderr, at the level named by `DRILL_LOG` (`warn` if it is not
/// set or not a level).
fn init_logging() {
    let level = std::env::var("DRILL_LOG")
        .ok()
        .and_then(|level| level.parse::<Level>().ok())
        .unwrap_or(Level::WARN);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();
}

/// A drill session driven from the terminal.
struct Drill {
    session: Session<StdRng>,
    typed: bool,
}

impl Drill {
    fn new(args: &Args) -> Self {
        let generator = match args.seed {
            Some(seed) => Generator::from_seed(seed),
            None => Generator::from_entropy(),
        };
        Self {
            session: Session::new(generator, args.family, args.mode),
            typed: args.typed,
        }
    }

    /// Prints the current problem, and the options if answers are picked.
    fn show_problem(&self) {
        let problem = self.session.problem();
        let config = self.session.config();
        let verb = match problem.mode {
            Mode::Expansion => "expand",
            Mode::Factorization => "factor",
        };

        println!();
        println!("[{}] {}/{} correct", problem.family.label(), self.session.correct_count(), config.goal);
        println!("{}: {}", verb, problem.question_form);
        println!("  {}", problem.question_display);
        if !self.typed {
            for (i, choice) in problem.choices.iter().enumerate() {
                println!("  {}) {}", i + 1, choice);
            }
        }
    }

    /// Prints the result of a submission.
    fn show_outcome(&self, input: &str, outcome: Outcome) {
        if let Some(reason) = outcome.reason() {
            error::report_to_stderr(reason, input);
        }

        match outcome {
            Outcome::Correct => {
                println!("correct!");
                if self.session.is_complete() {
                    println!("goal reached, type :restart to go again or :family to switch");
                }
                self.show_problem();
            },
            Outcome::Incorrect { attempts, .. } => {
                println!("not quite ({}/{})", attempts, self.session.config().max_attempts);
            },
            Outcome::Revealed { answer, .. } => {
                println!("the answer was: {}", self.session.problem().answer_form);
                println!("  {}", answer);
                println!("press enter for the next problem");
            },
            Outcome::Ignored => println!("press enter for the next problem"),
        }
    }

    /// Picks the option with the given number, counting from 1.
    fn pick(&mut self, input: &str) -> Option<Outcome> {
        let index = input.parse::<usize>().ok()?.checked_sub(1)?;
        let choice = self.session.problem().choices.get(index)?.clone();
        Some(self.session.submit_choice(&choice))
    }

    /// Runs a `:` command. Returns false if the drill should end.
    fn command(&mut self, command: &str) -> bool {
        let (name, arg) = command.split_once(' ').unwrap_or((command, ""));
        match name {
            "quit" | "q" => return false,
            "help" => println!("{}", HELP),
            "family" => match arg.trim().parse::<Family>() {
                Ok(family) => {
                    if self.session.select_family(family) {
                        self.show_problem();
                    }
                },
                Err(err) => eprintln!("{}", err),
            },
            "expand" => {
                if self.session.select_mode(Mode::Expansion) {
                    self.show_problem();
                }
            },
            "factor" => {
                if self.session.select_mode(Mode::Factorization) {
                    self.show_problem();
                }
            },
            "restart" => {
                self.session.restart();
                self.show_problem();
            },
            _ => eprintln!("unknown command `:{}`, type :help for a list", name),
        }
        true
    }

    /// Handles one line of input. Returns false if the drill should end.
    fn handle(&mut self, input: &str) -> bool {
        let input = input.trim();
        if let Some(command) = input.strip_prefix(':') {
            return self.command(command);
        }

        if self.session.acknowledge_reveal() {
            self.show_problem();
            return true;
        }
        if input.is_empty() {
            return true;
        }

        if self.typed {
            let outcome = self.session.submit_typed(input);
            self.show_outcome(input, outcome);
        } else {
            match self.pick(input) {
                Some(outcome) => self.show_outcome(input, outcome),
                None => eprintln!("pick an option from 1 to {}", self.session.problem().choices.len()),
            }
        }
        true
    }
}

fn main() -> ExitCode {
    init_logging();

    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    let mut drill = Drill::new(&args);
    drill.show_problem();

    if !io::stdin().is_terminal() {
        // answers piped in, one per line
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if !drill.handle(&line) {
                break;
            }
        }
        return ExitCode::SUCCESS;
    }

    let mut rl = match DefaultEditor::new() {
        Ok(rl) => rl,
        Err(err) => {
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        },
    };

    fn process_line(rl: &mut DefaultEditor, drill: &mut Drill) -> Result<bool, ReadlineError> {
        let input = rl.readline("> ")?;
        if !input.trim().is_empty() {
            rl.add_history_entry(&input)?;
        }

        Ok(drill.handle(&input))
    }

    loop {
        match process_line(&mut rl, &mut drill) {
            Ok(true) => (),
            Ok(false) => break,
            Err(err) => {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            },
        }
    }
    ExitCode::SUCCESS
}
