//! Interactive numbered menu.
//!
//! Runs until the user picks Exit or input ends. Operation failures are
//! logged and the menu is shown again.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::error;

use crate::console::Console;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
  CreateSchema,
  Import,
  SimpleQuery,
  ComplexQuery,
  UserQuery,
  Exit,
}

impl Choice {
  fn from_number(n: u32) -> Option<Self> {
    Some(match n {
      1 => Self::CreateSchema,
      2 => Self::Import,
      3 => Self::SimpleQuery,
      4 => Self::ComplexQuery,
      5 => Self::UserQuery,
      6 => Self::Exit,
      _ => return None,
    })
  }
}

const MENU: &str = "
============================================
          Movie Database Menu
============================================
1) Create Database Schema.
2) Import Data (Requires CSV files).
3) Perform Simple SELECT (Movie Titles).
4) Perform Complex SELECT (Movie Title, Rating, Country).
5) Perform User-defined SELECT statement.
6) Exit.
--------------------------------------------";

pub fn run<R, W>(console: &mut Console<W>, input: R) -> Result<()>
where
  R: BufRead,
  W: Write,
{
  let mut lines = input.lines();

  loop {
    writeln!(console.out(), "{MENU}")?;
    write!(console.out(), "Enter your choice: ")?;
    console.out().flush()?;

    let Some(line) = lines.next() else { break };
    let line = line?;

    let Ok(number) = line.trim().parse::<u32>() else {
      writeln!(console.out(), "\nInvalid input. Please enter a number.")?;
      continue;
    };
    let Some(choice) = Choice::from_number(number) else {
      writeln!(
        console.out(),
        "\nInvalid choice. Please select an option from 1 to 6."
      )?;
      continue;
    };

    let result = match choice {
      Choice::CreateSchema => console.define_schema(),
      Choice::Import => console.import(),
      Choice::SimpleQuery => console.simple_query(),
      Choice::ComplexQuery => console.complex_query(),
      Choice::UserQuery => {
        write!(
          console.out(),
          "Enter your SELECT query (e.g., SELECT * FROM Rating;): \n> "
        )?;
        console.out().flush()?;
        let Some(sql) = lines.next() else { break };
        console.user_query(&sql?)
      }
      Choice::Exit => {
        writeln!(console.out(), "\nExiting the program. Goodbye!")?;
        return Ok(());
      }
    };

    if let Err(e) = result {
      error!("{e:#}");
    }
  }

  Ok(())
}
