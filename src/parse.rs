use std::io::{BufRead, Write};

use nalgebra::Vector3;
use thiserror::Error;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("'{token}' is not a number")]
    InvalidNumber { token: String },

    #[error("expected 2 or 3 components, found {found}")]
    ComponentCount { found: usize },

    #[error("expected exactly 3 components, found {found}")]
    NotThreeComponents { found: usize },
}


/// Splits `text` on commas and converts every trimmed token to `f64`.
pub fn parse_components(text: &str) -> Result<Vec<f64>, ParseError> {
    text.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<f64>().map_err(|_| ParseError::InvalidNumber {
                token: token.to_owned(),
            })
        })
        .collect()
}


/// Parses "x, y" or "x, y, z". Two components land on the XY plane (z = 0).
pub fn parse_vector(text: &str) -> Result<Vector3<f64>, ParseError> {
    match parse_components(text)?.as_slice() {
        &[x, y] => Ok(Vector3::new(x, y, 0.0)),
        &[x, y, z] => Ok(Vector3::new(x, y, z)),
        other => Err(ParseError::ComponentCount { found: other.len() }),
    }
}


/// Like [`parse_vector`] but only accepts exactly three components.
pub fn parse_vector_strict(text: &str) -> Result<Vector3<f64>, ParseError> {
    match parse_components(text)?.as_slice() {
        &[x, y, z] => Ok(Vector3::new(x, y, z)),
        other => Err(ParseError::NotThreeComponents { found: other.len() }),
    }
}


/// Console-style entry: prompts on `output`, reads one line from `input`.
///
/// Failures are reported on `output` and yield `None`.
pub fn prompt_vector(input: &mut impl BufRead, output: &mut impl Write) -> Option<Vector3<f64>> {
    let _ = write!(output, "Enter vector components (comma-separated): ");
    let _ = output.flush();

    let mut line = String::new();
    if input.read_line(&mut line).is_err() {
        let _ = writeln!(output, "Invalid input. Please enter valid vector components.");
        return None;
    }

    match parse_vector(line.trim_end_matches(['\r', '\n'])) {
        Ok(v) => Some(v),
        Err(err) => {
            log::warn!("rejected console input {:?}: {}", line.trim_end(), err);
            let _ = writeln!(output, "Invalid input. Please enter valid vector components.");
            None
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn two_components_are_promoted_to_xy_plane() {
        let v = parse_vector("1,2").unwrap();
        assert_eq!(v, Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn three_components_keep_their_order() {
        let v = parse_vector(" -1.5 , 2e2,0.25 ").unwrap();
        assert_eq!(v, Vector3::new(-1.5, 200.0, 0.25));
    }

    #[test]
    fn non_numeric_token_is_reported() {
        assert_eq!(
            parse_vector("a,b,c"),
            Err(ParseError::InvalidNumber { token: "a".into() })
        );
        assert_eq!(
            parse_vector("1,,3"),
            Err(ParseError::InvalidNumber { token: "".into() })
        );
    }

    #[test]
    fn wrong_component_count() {
        assert_eq!(parse_vector("1"), Err(ParseError::ComponentCount { found: 1 }));
        assert_eq!(parse_vector("1,2,3,4"), Err(ParseError::ComponentCount { found: 4 }));
        assert!(parse_vector("").is_err());
    }

    #[test]
    fn strict_parser_rejects_two_components() {
        assert_eq!(
            parse_vector_strict("1,2"),
            Err(ParseError::NotThreeComponents { found: 2 })
        );
        assert_eq!(parse_vector_strict("1,2,3").unwrap(), Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn prompt_reads_one_line() {
        let mut input = Cursor::new("3, 4\n");
        let mut output = Vec::new();
        let v = prompt_vector(&mut input, &mut output);

        assert_eq!(v, Some(Vector3::new(3.0, 4.0, 0.0)));
        let shown = String::from_utf8(output).unwrap();
        assert_eq!(shown, "Enter vector components (comma-separated): ");
    }

    #[test]
    fn prompt_reports_bad_input_and_returns_none() {
        let mut input = Cursor::new("x, y, z\n");
        let mut output = Vec::new();

        assert_eq!(prompt_vector(&mut input, &mut output), None);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.ends_with("Invalid input. Please enter valid vector components.\n"));
    }
}
