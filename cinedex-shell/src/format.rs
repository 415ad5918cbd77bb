//! Rendering of listing output.

use std::io::{self, Write};

use cinedex_catalog::{format_length, Movie};

/// `<title> by <director>, <HH:MM:SS>`
pub fn movie_line(movie: &Movie) -> String {
    format!(
        "{} by {}, {}",
        movie.title,
        movie.director_name,
        format_length(movie.length_in_seconds)
    )
}

/// Write a cast block indented under a movie line.
pub fn write_cast<W: Write + ?Sized>(out: &mut W, actors: &[String]) -> io::Result<()> {
    writeln!(out, "\tStarring:")?;
    for actor in actors {
        writeln!(out, "\t\t- {}", actor)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_line_format() {
        let movie = Movie {
            id: 1,
            title: "Movie A".to_string(),
            director_name: "Director A".to_string(),
            length_in_seconds: 3600,
        };
        assert_eq!(movie_line(&movie), "Movie A by Director A, 01:00:00");
    }

    #[test]
    fn cast_block() {
        let mut out = Vec::new();
        write_cast(&mut out, &["Kate Winslet".to_string(), "Billy Zane".to_string()]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\tStarring:\n\t\t- Kate Winslet\n\t\t- Billy Zane\n"
        );
    }

    #[test]
    fn empty_cast_still_has_header() {
        let mut out = Vec::new();
        write_cast(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\tStarring:\n");
    }
}
