//! Line commands for the interactive session.

use std::str::FromStr;

use thiserror::Error;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Rebuild the island with a new radius and maximum height, optionally
    /// with a specific seed.
    Generate {
        radius: f32,
        max_height: f32,
        seed: Option<u64>,
    },
    Day,
    Night,
    Toggle,
    /// Set the global light scale.
    Light(f32),
    /// Advance the animation by a number of fixed frames.
    Step(u32),
    Export,
    Stats,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`, try `help`")]
    Unknown(String),
    #[error("`{command}` needs <{argument}>")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("`{value}` is not a valid {argument}")]
    InvalidNumber {
        argument: &'static str,
        value: String,
    },
    #[error("`{0}` takes fewer arguments")]
    TooManyArguments(&'static str),
}

pub const HELP: &str = "commands: generate <radius> <max_height> [seed] | day | night | toggle | \
light <scale> | step <frames> | export | stats | help | quit";

fn argument<'a, T: FromStr>(
    words: &mut impl Iterator<Item = &'a str>,
    command: &'static str,
    name: &'static str,
) -> Result<T, CommandError> {
    let word = words.next().ok_or(CommandError::MissingArgument {
        command,
        argument: name,
    })?;
    parse_word(word, name)
}

fn optional_argument<'a, T: FromStr>(
    words: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> Result<Option<T>, CommandError> {
    words.next().map(|word| parse_word(word, name)).transpose()
}

fn parse_word<T: FromStr>(word: &str, name: &'static str) -> Result<T, CommandError> {
    word.parse().map_err(|_| CommandError::InvalidNumber {
        argument: name,
        value: word.to_string(),
    })
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?.to_ascii_lowercase();

        let (name, command) = match head.as_str() {
            "generate" | "gen" => {
                let radius = argument(&mut words, "generate", "radius")?;
                let max_height = argument(&mut words, "generate", "max_height")?;
                let seed = optional_argument(&mut words, "seed")?;
                (
                    "generate",
                    Command::Generate {
                        radius,
                        max_height,
                        seed,
                    },
                )
            }
            "day" => ("day", Command::Day),
            "night" => ("night", Command::Night),
            "toggle" => ("toggle", Command::Toggle),
            "light" => ("light", Command::Light(argument(&mut words, "light", "scale")?)),
            "step" => {
                let frames = optional_argument(&mut words, "frames")?.unwrap_or(1);
                ("step", Command::Step(frames))
            }
            "export" => ("export", Command::Export),
            "stats" => ("stats", Command::Stats),
            "help" | "?" => ("help", Command::Help),
            "quit" | "exit" | "q" => ("quit", Command::Quit),
            _ => return Err(CommandError::Unknown(head)),
        };

        if words.next().is_some() {
            return Err(CommandError::TooManyArguments(name));
        }
        Ok(command)
    }
}
