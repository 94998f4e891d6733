//! SQL schema for the movie catalog.
//!
//! Both batches run inside one transaction in
//! [`MovieStore::define_schema`](crate::MovieStore::define_schema). Dropping
//! and recreating every table makes the definition idempotent.

/// Drops bridges first, then `Movie`, then the lookup tables they reference.
pub const DROP_TABLES: &str = "
DROP TABLE IF EXISTS MovieStudio;
DROP TABLE IF EXISTS MovieDirector;
DROP TABLE IF EXISTS MovieActor;
DROP TABLE IF EXISTS MovieGenre;
DROP TABLE IF EXISTS Movie;
DROP TABLE IF EXISTS Rating;
DROP TABLE IF EXISTS Country;
DROP TABLE IF EXISTS Genre;
DROP TABLE IF EXISTS Person;
DROP TABLE IF EXISTS Studio;
";

/// Primary keys are supplied by the source files, never generated.
pub const CREATE_TABLES: &str = "
CREATE TABLE Rating  ( rating_id  INTEGER PRIMARY KEY, rating_name  CHAR );
CREATE TABLE Country ( country_id INTEGER PRIMARY KEY, country_name CHAR );
CREATE TABLE Studio  ( Studio_id  INTEGER PRIMARY KEY, Studio_name  CHAR );
CREATE TABLE Person  ( Person_id  INTEGER PRIMARY KEY, Full_name    CHAR );
CREATE TABLE Genre   ( genre_id   INTEGER PRIMARY KEY, genre_name   CHAR );

CREATE TABLE Movie (
    Movie_id     INTEGER PRIMARY KEY,
    Title        CHAR,
    release_year INTEGER,
    ownership    CHAR,
    rating_id    INTEGER REFERENCES Rating(rating_id),
    country_id   INTEGER REFERENCES Country(country_id)
);

-- Bridges: composite keys, no cascades.
CREATE TABLE MovieGenre (
    Movie_id INTEGER REFERENCES Movie(Movie_id),
    Genre_id INTEGER REFERENCES Genre(genre_id),
    PRIMARY KEY (Movie_id, Genre_id)
);

CREATE TABLE MovieActor (
    Movie_id  INTEGER REFERENCES Movie(Movie_id),
    Person_id INTEGER REFERENCES Person(Person_id),
    Role      CHAR,
    PRIMARY KEY (Movie_id, Person_id)
);

CREATE TABLE MovieDirector (
    Movie_id  INTEGER REFERENCES Movie(Movie_id),
    Person_id INTEGER REFERENCES Person(Person_id),
    PRIMARY KEY (Movie_id, Person_id)
);

CREATE TABLE MovieStudio (
    Movie_id  INTEGER REFERENCES Movie(Movie_id),
    Studio_id INTEGER REFERENCES Studio(Studio_id),
    PRIMARY KEY (Movie_id, Studio_id)
);
";
