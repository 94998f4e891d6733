//! Table shapes — the fixed, ordered field lists expected for each source
//! file during ingestion.
//!
//! Identifiers in this module are static and are the only text ever spliced
//! into generated SQL; row values are always bound as parameters.

// ─── Fields ──────────────────────────────────────────────────────────────────

/// How a field is typed in the target table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
  /// Identifiers, years and foreign keys.
  Integer,
  Text,
}

/// One column of a [`TableShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
  pub column: &'static str,
  pub kind:   FieldKind,
}

const fn int(column: &'static str) -> Field {
  Field { column, kind: FieldKind::Integer }
}

const fn text(column: &'static str) -> Field {
  Field { column, kind: FieldKind::Text }
}

// ─── Shapes ──────────────────────────────────────────────────────────────────

/// The ordered, fixed-arity list of fields for one source/table pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableShape {
  pub table:  &'static str,
  pub fields: &'static [Field],
}

impl TableShape {
  /// Number of fields a source line must provide.
  pub fn arity(&self) -> usize { self.fields.len() }

  /// File name of the source for this table, e.g. `Movie.csv`.
  pub fn source_file(&self) -> String { format!("{}.csv", self.table) }

  /// Parameterized `INSERT` template binding every field positionally.
  pub fn insert_sql(&self) -> String {
    let columns = self
      .fields
      .iter()
      .map(|f| f.column)
      .collect::<Vec<_>>()
      .join(", ");
    let placeholders = (1..=self.arity())
      .map(|i| format!("?{i}"))
      .collect::<Vec<_>>()
      .join(", ");
    format!(
      "INSERT INTO {} ({columns}) VALUES ({placeholders})",
      self.table
    )
  }
}

pub const RATING: TableShape = TableShape {
  table:  "Rating",
  fields: &[int("rating_id"), text("rating_name")],
};

pub const COUNTRY: TableShape = TableShape {
  table:  "Country",
  fields: &[int("country_id"), text("country_name")],
};

pub const GENRE: TableShape = TableShape {
  table:  "Genre",
  fields: &[int("genre_id"), text("genre_name")],
};

pub const PERSON: TableShape = TableShape {
  table:  "Person",
  fields: &[int("Person_id"), text("Full_name")],
};

pub const STUDIO: TableShape = TableShape {
  table:  "Studio",
  fields: &[int("Studio_id"), text("Studio_name")],
};

pub const MOVIE: TableShape = TableShape {
  table:  "Movie",
  fields: &[
    int("Movie_id"),
    text("Title"),
    int("release_year"),
    text("ownership"),
    int("rating_id"),
    int("country_id"),
  ],
};

pub const MOVIE_GENRE: TableShape = TableShape {
  table:  "MovieGenre",
  fields: &[int("Movie_id"), int("Genre_id")],
};

pub const MOVIE_DIRECTOR: TableShape = TableShape {
  table:  "MovieDirector",
  fields: &[int("Movie_id"), int("Person_id")],
};

pub const MOVIE_STUDIO: TableShape = TableShape {
  table:  "MovieStudio",
  fields: &[int("Movie_id"), int("Studio_id")],
};

pub const MOVIE_ACTOR: TableShape = TableShape {
  table:  "MovieActor",
  fields: &[int("Movie_id"), int("Person_id"), text("Role")],
};

/// Every table, in foreign-key dependency order: lookup tables, then
/// `Movie`, then the bridges. Bulk loading follows this order.
pub const IMPORT_ORDER: [TableShape; 10] = [
  RATING,
  COUNTRY,
  GENRE,
  PERSON,
  STUDIO,
  MOVIE,
  MOVIE_GENRE,
  MOVIE_DIRECTOR,
  MOVIE_STUDIO,
  MOVIE_ACTOR,
];

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_template_binds_every_field() {
    assert_eq!(
      MOVIE_ACTOR.insert_sql(),
      "INSERT INTO MovieActor (Movie_id, Person_id, Role) VALUES (?1, ?2, ?3)"
    );
    assert_eq!(MOVIE.insert_sql().matches('?').count(), MOVIE.arity());
  }

  #[test]
  fn source_file_is_named_after_table() {
    assert_eq!(MOVIE_GENRE.source_file(), "MovieGenre.csv");
  }

  #[test]
  fn lookups_precede_movie_and_movie_precedes_bridges() {
    let pos = |t: &str| {
      IMPORT_ORDER
        .iter()
        .position(|s| s.table == t)
        .unwrap()
    };
    for lookup in ["Rating", "Country", "Genre", "Person", "Studio"] {
      assert!(pos(lookup) < pos("Movie"));
    }
    for bridge in ["MovieGenre", "MovieDirector", "MovieStudio", "MovieActor"] {
      assert!(pos("Movie") < pos(bridge));
    }
  }
}
