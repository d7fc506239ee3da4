//! Menu loop driving the roster.
//!
//! [`CliApp`] owns the roster and the battle RNG and reads choices from a
//! [`Console`]. Each menu action returns a [`Flow`]: end of input at any
//! prompt ends the session just like choosing Exit.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use roster_core::{
    CharacterClass, CharacterId, CharacterUpdate, GameError, RngOracle, RosterConfig,
};
use roster_runtime::{Roster, RuntimeError};

use crate::config::CliConfig;
use crate::input::{Console, to_character_id};
use crate::menu::{MenuChoice, UpdateChoice};
use crate::presentation::{CharacterTable, Theme, summary_line, write_battle, write_profile};

const MENU_RULE_WIDTH: usize = 40;
const BANNER_WIDTH: usize = 60;

/// Whether the menu loop keeps going after an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Bail out of an action with [`Flow::Exit`] when input has ended.
macro_rules! or_exit {
    ($read:expr) => {
        match $read? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Interactive text front-end.
pub struct CliApp<G> {
    roster: Roster,
    rng: G,
    theme: Theme,
    table: CharacterTable,
}

impl<G: RngOracle> CliApp<G> {
    pub fn new(roster: Roster, rng: G, config: &CliConfig) -> Self {
        Self {
            roster,
            rng,
            theme: Theme::new(config.ui.color),
            table: CharacterTable::new(config.ui.name_width),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Run the menu until Exit or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        let mut console = Console::new(input, output);
        self.write_welcome(&mut console)?;
        tracing::info!("menu session started");

        loop {
            self.write_menu(&mut console)?;
            let Some(number) = console.prompt_number("Enter your choice: ")? else {
                break;
            };

            let Some(choice) = MenuChoice::from_number(number) else {
                tracing::debug!(number, "unknown menu choice");
                let message = self.theme.error("Invalid choice! Please try again.");
                writeln!(console.out(), "{message}")?;
                continue;
            };

            tracing::debug!(?choice, "menu choice");
            if self.dispatch(choice, &mut console)? == Flow::Exit {
                break;
            }
        }

        let farewell = self.theme.heading("Thanks for playing! Goodbye!");
        writeln!(console.out(), "\n{farewell}")?;
        console.out().flush().context("failed to flush output")?;
        tracing::info!("menu session ended");
        Ok(())
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        console: &mut Console<R, W>,
    ) -> Result<Flow> {
        match choice {
            MenuChoice::Create => self.create(console),
            MenuChoice::ViewAll => self.view_all(console),
            MenuChoice::ViewOne => self.view_one(console),
            MenuChoice::Update => self.update(console),
            MenuChoice::Delete => self.delete(console),
            MenuChoice::Battle => self.battle(console),
            MenuChoice::Exit => Ok(Flow::Exit),
        }
    }

    fn create<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        writeln!(console.out(), "\n{}", self.theme.heading(">>> CREATE NEW CHARACTER <<<"))?;
        let name = or_exit!(console.prompt_line("Enter character name: "));

        writeln!(console.out(), "Available classes: {}", archetype_list())?;
        let class = or_exit!(console.prompt_line("Enter character class: "));
        let level = or_exit!(console.prompt_number(&level_prompt("starting")));

        let id = self.roster.create(&name, CharacterClass::parse(&class), level)?;
        let record = self.roster.get(id)?;

        writeln!(console.out(), "\n{}", self.theme.success("Character created successfully!"))?;
        writeln!(
            console.out(),
            "ID: {} | Name: {} | Class: {} | Level: {}",
            record.id(),
            record.name(),
            record.class(),
            record.level()
        )?;
        Ok(Flow::Continue)
    }

    fn view_all<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        writeln!(console.out(), "\n{}", self.theme.heading(">>> ALL CHARACTERS <<<"))?;
        self.write_table(console)?;
        Ok(Flow::Continue)
    }

    fn view_one<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        writeln!(console.out(), "\n{}", self.theme.heading(">>> VIEW CHARACTER DETAILS <<<"))?;
        let number = or_exit!(console.prompt_number("Enter character ID: "));

        match self.lookup(number)? {
            Some(id) => {
                let record = self.roster.get(id)?;
                write_profile(console.out(), &self.theme, &record)?;
            }
            None => self.write_not_found(console, number)?,
        }
        Ok(Flow::Continue)
    }

    fn update<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        writeln!(console.out(), "\n{}", self.theme.heading(">>> UPDATE CHARACTER <<<"))?;
        let number = or_exit!(console.prompt_number("Enter character ID to update: "));

        let Some(id) = self.lookup(number)? else {
            writeln!(console.out(), "{}", self.theme.error("Character not found!"))?;
            return Ok(Flow::Continue);
        };
        let current = self.roster.get(id)?;
        writeln!(console.out(), "{}", summary_line(&current))?;

        writeln!(console.out(), "\nWhat do you want to update?")?;
        for line in UpdateChoice::lines() {
            writeln!(console.out(), "{line}")?;
        }
        let number = or_exit!(console.prompt_number("Choice: "));
        let Some(choice) = UpdateChoice::from_number(number) else {
            writeln!(console.out(), "{}", self.theme.error("Invalid choice!"))?;
            return Ok(Flow::Continue);
        };

        let mut update = CharacterUpdate::new();
        if choice.touches_name() {
            update = update.name(or_exit!(console.prompt_line("Enter new name: ")));
        }
        if choice.touches_class() {
            let class = or_exit!(console.prompt_line("Enter new class: "));
            update = update.class(CharacterClass::parse(&class));
        }
        if choice.touches_level() {
            update = update.level(or_exit!(console.prompt_number(&level_prompt("new"))));
        }

        self.roster.update(id, &update)?;
        writeln!(console.out(), "{}", self.theme.success("Character updated successfully!"))?;
        Ok(Flow::Continue)
    }

    fn delete<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        writeln!(console.out(), "\n{}", self.theme.heading(">>> DELETE CHARACTER <<<"))?;
        let number = or_exit!(console.prompt_number("Enter character ID to delete: "));

        match self.lookup(number)? {
            Some(id) => {
                let removed = self.roster.delete(id)?;
                let message = format!("Character '{}' has been deleted!", removed.name());
                writeln!(console.out(), "{}", self.theme.success(&message))?;
            }
            None => self.write_not_found(console, number)?,
        }
        Ok(Flow::Continue)
    }

    fn battle<R: BufRead, W: Write>(&mut self, console: &mut Console<R, W>) -> Result<Flow> {
        writeln!(console.out(), "\n{}", self.theme.heading(">>> BATTLE SIMULATOR <<<"))?;
        if !self.roster.can_battle()? {
            let message = self.theme.error("Need at least 2 characters for battle!");
            writeln!(console.out(), "{message}")?;
            return Ok(Flow::Continue);
        }

        self.view_all(console)?;
        let first = or_exit!(console.prompt_number("Enter first fighter's ID: "));
        let second = or_exit!(console.prompt_number("Enter second fighter's ID: "));

        let Some((first, second)) = to_character_id(first).zip(to_character_id(second)) else {
            writeln!(console.out(), "{}", self.theme.error("Invalid character IDs!"))?;
            return Ok(Flow::Continue);
        };

        let matchup = match self.roster.battle(first, second, &mut self.rng) {
            Ok(matchup) => matchup,
            Err(err) if err.severity().is_recoverable() => {
                tracing::debug!(%first, %second, code = err.error_code(), "battle lookup missed");
                writeln!(console.out(), "{}", self.theme.error("Invalid character IDs!"))?;
                return Ok(Flow::Continue);
            }
            Err(err) => return Err(fatal(err)),
        };

        write_battle(
            console.out(),
            &self.theme,
            &matchup.first,
            &matchup.second,
            &matchup.report,
        )?;
        Ok(Flow::Continue)
    }

    /// Resolve a typed number to a stored id; `None` when nothing matches.
    ///
    /// Only a missing record is absorbed here. Any other store failure is
    /// passed up and ends the session.
    fn lookup(&self, number: i64) -> Result<Option<CharacterId>> {
        let Some(id) = to_character_id(number) else {
            return Ok(None);
        };
        match self.roster.get(id) {
            Ok(_) => Ok(Some(id)),
            Err(err) if err.severity().is_recoverable() => {
                tracing::debug!(number, code = err.error_code(), "lookup missed");
                Ok(None)
            }
            Err(err) => Err(fatal(err)),
        }
    }

    fn write_table<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let records = self.roster.list()?;
        if records.is_empty() {
            let message = self.theme.error("No characters found! Create one first.");
            writeln!(console.out(), "{message}")?;
            return Ok(());
        }

        self.table.write(console.out(), &records)?;
        writeln!(console.out(), "Total characters: {}", records.len())?;
        Ok(())
    }

    fn write_not_found<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        number: i64,
    ) -> Result<()> {
        let message = format!("Character not found with ID: {number}");
        writeln!(console.out(), "{}", self.theme.error(&message))?;
        Ok(())
    }

    fn write_welcome<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let rule = "=".repeat(BANNER_WIDTH);
        let out = console.out();
        writeln!(out, "\n{rule}")?;
        writeln!(
            out,
            "{}",
            self.theme.heading("       WELCOME TO THE CRUD CHARACTER MANAGER GAME!")
        )?;
        writeln!(out, "{rule}")?;
        writeln!(out, "Manage your party of heroes using CRUD operations!")?;
        Ok(())
    }

    fn write_menu<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> Result<()> {
        let rule = "-".repeat(MENU_RULE_WIDTH);
        let out = console.out();
        writeln!(out, "\n{rule}")?;
        writeln!(out, "{}", self.theme.heading("           MAIN MENU"))?;
        writeln!(out, "{rule}")?;
        for line in MenuChoice::lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out, "{rule}")?;
        Ok(())
    }
}

fn archetype_list() -> String {
    CharacterClass::ARCHETYPES
        .iter()
        .map(CharacterClass::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn level_prompt(which: &str) -> String {
    format!(
        "Enter {which} level ({}-{}): ",
        RosterConfig::MIN_LEVEL,
        RosterConfig::MAX_LEVEL
    )
}

fn fatal(err: RuntimeError) -> anyhow::Error {
    tracing::error!(code = err.error_code(), %err, "roster failure");
    anyhow::Error::new(err).context("roster store failed")
}
