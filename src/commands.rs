//! Line-oriented command interpreter driving a single Pokedex.

use crate::errors::{CommandError, CommandResult};
use crate::pokedex::Pokedex;
use log::{debug, warn};
use schema::{Pokemon, PokemonId, PokemonType};
use std::str::FromStr;

pub const HELP: &str = "\
a <id> <name> <height> <weight> <type1> [type2]  add a Pokemon
p                     print all Pokemon
d                     show details of the current Pokemon
f                     mark the current Pokemon as found
>                     move to the next Pokemon
<                     move to the previous Pokemon
m <id>                move to the Pokemon with this id
r                     remove the current Pokemon
x <seed> <bound> <n>  go exploring
c                     count found and total Pokemon
e <from> <to>         add an evolution
s                     show the current evolution chain
n                     show the next evolution of the current Pokemon
t <type>              list found Pokemon of a type
F                     list all found Pokemon by id
S <text>              search found Pokemon by name
?                     show this help
q                     quit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add(Pokemon),
    Print,
    Detail,
    Find,
    Next,
    Prev,
    Select(PokemonId),
    Remove,
    Explore {
        seed: u64,
        range_bound: PokemonId,
        count: usize,
    },
    Count,
    AddEvolution {
        from: PokemonId,
        to: PokemonId,
    },
    ShowEvolutions,
    NextEvolution,
    ByType(String),
    AllFound,
    Search(String),
    Help,
    Quit,
}

/// What a command produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Text(String),
    Silent,
    Quit,
}

fn next_arg<'a>(
    args: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> CommandResult<&'a str> {
    args.next().ok_or(CommandError::MissingArgument(name))
}

fn parse_arg<'a, T: FromStr>(
    args: &mut impl Iterator<Item = &'a str>,
    name: &'static str,
) -> CommandResult<T> {
    let value = next_arg(args, name)?;
    value.parse().map_err(|_| CommandError::InvalidArgument {
        name,
        value: value.to_string(),
    })
}

fn parse_add<'a>(args: &mut impl Iterator<Item = &'a str>) -> CommandResult<Pokemon> {
    let id = parse_arg(args, "id")?;
    let name = next_arg(args, "name")?;
    let height = parse_arg(args, "height")?;
    let weight = parse_arg(args, "weight")?;
    let first_type = parse_arg(args, "type")?;
    let second_type = match args.next() {
        None => None,
        Some(text) => match PokemonType::from_str(text) {
            Ok(PokemonType::Typeless) => None,
            Ok(pokemon_type) => Some(pokemon_type),
            Err(_) => {
                return Err(CommandError::InvalidArgument {
                    name: "type",
                    value: text.to_string(),
                })
            }
        },
    };
    Ok(Pokemon::new(id, name, height, weight, first_type, second_type)?)
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let mut args = line.split_whitespace();
        let Some(letter) = args.next() else {
            return Ok(None);
        };

        let command = match letter {
            "a" => Command::Add(parse_add(&mut args)?),
            "p" => Command::Print,
            "d" => Command::Detail,
            "f" => Command::Find,
            ">" => Command::Next,
            "<" => Command::Prev,
            "m" => Command::Select(parse_arg(&mut args, "id")?),
            "r" => Command::Remove,
            "x" => Command::Explore {
                seed: parse_arg(&mut args, "seed")?,
                range_bound: parse_arg(&mut args, "bound")?,
                count: parse_arg(&mut args, "count")?,
            },
            "c" => Command::Count,
            "e" => Command::AddEvolution {
                from: parse_arg(&mut args, "from id")?,
                to: parse_arg(&mut args, "to id")?,
            },
            "s" => Command::ShowEvolutions,
            "n" => Command::NextEvolution,
            "t" => Command::ByType(next_arg(&mut args, "type")?.to_string()),
            "F" => Command::AllFound,
            // Search text may contain spaces
            "S" => {
                let text = args.by_ref().collect::<Vec<_>>().join(" ");
                if text.is_empty() {
                    return Err(CommandError::MissingArgument("text"));
                }
                Command::Search(text)
            }
            "?" => Command::Help,
            "q" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = args.next() {
            return Err(CommandError::UnexpectedArgument(extra.to_string()));
        }
        Ok(Some(command))
    }
}

/// A Pokedex plus the commands that act on it.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pokedex: Pokedex,
}

fn list_or_empty(pokedex: &Pokedex) -> String {
    if pokedex.is_empty() {
        "No Pokemon to show".to_string()
    } else {
        pokedex.render_list()
    }
}

impl Session {
    pub fn new(pokedex: Pokedex) -> Self {
        Self { pokedex }
    }

    pub fn pokedex(&self) -> &Pokedex {
        &self.pokedex
    }

    /// Parse and run one line. Blank lines produce no output.
    pub fn run_line(&mut self, line: &str) -> CommandResult<Output> {
        match Command::parse(line)? {
            Some(command) => self.execute(command),
            None => Ok(Output::Silent),
        }
    }

    pub fn execute(&mut self, command: Command) -> CommandResult<Output> {
        debug!("Executing {:?}", command);
        let pokedex = &mut self.pokedex;

        let output = match command {
            Command::Add(pokemon) => {
                pokedex.insert_append(pokemon)?;
                Output::Silent
            }
            Command::Print => Output::Text(list_or_empty(pokedex)),
            Command::Detail => Output::Text(pokedex.render_detail()?),
            Command::Find => {
                pokedex.mark_current_found();
                Output::Silent
            }
            Command::Next => {
                pokedex.advance();
                Output::Silent
            }
            Command::Prev => {
                pokedex.retreat();
                Output::Silent
            }
            Command::Select(id) => {
                pokedex.select_by_id(id);
                Output::Silent
            }
            Command::Remove => {
                pokedex.remove_current();
                Output::Silent
            }
            Command::Explore {
                seed,
                range_bound,
                count,
            } => {
                pokedex.explore(seed, range_bound, count)?;
                Output::Silent
            }
            Command::Count => Output::Text(format!(
                "{}/{} Pokemon found",
                pokedex.count_found(),
                pokedex.count_total()
            )),
            Command::AddEvolution { from, to } => {
                pokedex.set_evolution(from, to)?;
                Output::Silent
            }
            Command::ShowEvolutions => Output::Text(pokedex.render_evolution_chain()),
            Command::NextEvolution => Output::Text(match pokedex.next_evolution()? {
                Some(id) => format!("#{:03}", id),
                None => "Does not evolve".to_string(),
            }),
            Command::ByType(type_name) => {
                Output::Text(list_or_empty(&pokedex.by_type_name(&type_name)?))
            }
            Command::AllFound => Output::Text(list_or_empty(&pokedex.all_found())),
            Command::Search(text) => Output::Text(list_or_empty(&pokedex.by_name_substring(&text))),
            Command::Help => Output::Text(HELP.to_string()),
            Command::Quit => Output::Quit,
        };
        Ok(output)
    }
}

/// Report a failed command without ending the session.
pub fn report_error(line: &str, err: &CommandError) -> String {
    warn!("Command '{}' failed: {}", line.trim(), err);
    format!("Error: {}", err)
}
