// src/services/path_data.rs
// Parses SVG path data ("d" attribute) into the abstract path model so
// styles can carry custom module and eye shapes. Absolute M/L/C/A/Z
// commands only; anything else fails the parse.

use std::str::FromStr;

use regex::Regex;

use crate::models::Path;

/// Parses absolute path data like `M0 0 L1 0 L1 1 L0 1 Z`.
/// Returns None on any unknown command or malformed argument list.
pub fn parse_path_data(d: &str) -> Option<Path> {
    let command_re = Regex::new(r"([A-Za-z])([^A-Za-z]*)").ok()?;
    let number_re = Regex::new(r"[-+]?[0-9]*\.?[0-9]+(?:[eE][-+]?[0-9]+)?").ok()?;

    // reject anything before the first command letter
    if !d.trim_start().starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }

    let mut path = Path::new();
    for caps in command_re.captures_iter(d) {
        let args: Vec<f64> = number_re
            .find_iter(&caps[2])
            .map(|m| f64::from_str(m.as_str()))
            .collect::<Result<_, _>>()
            .ok()?;

        path = match &caps[1] {
            "M" => {
                let [x, y] = exactly(&args)?;
                path.move_to(x, y)
            }
            "L" => {
                let [x, y] = exactly(&args)?;
                path.line_to(x, y)
            }
            "C" => {
                let [x1, y1, x2, y2, x3, y3] = exactly(&args)?;
                path.curve_to(x1, y1, x2, y2, x3, y3)
            }
            "A" => {
                let [rx, ry, angle, large_arc, sweep, x, y] = exactly(&args)?;
                path.arc_to(rx, ry, angle, large_arc != 0.0, sweep != 0.0, x, y)
            }
            "Z" | "z" => {
                if !args.is_empty() {
                    return None;
                }
                path.close()
            }
            _ => return None,
        };
    }

    if path.is_empty() {
        None
    } else {
        Some(path)
    }
}

fn exactly<const N: usize>(args: &[f64]) -> Option<[f64; N]> {
    <[f64; N]>::try_from(args).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PathOp;

    #[test]
    fn test_parse_square() {
        let path = parse_path_data("M0 0 L1 0 L1 1 L0 1 Z").unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.ops()[0], PathOp::Move { x: 0.0, y: 0.0 });
        assert_eq!(path.ops()[3], PathOp::Line { x: 0.0, y: 1.0 });
        assert_eq!(path.ops()[4], PathOp::Close);
    }

    #[test]
    fn test_parse_arc_and_curve() {
        let path = parse_path_data("M0.1,0.5 A0.4,0.4 0 0,1 0.9,0.5 C1 1 0 1 0.1 0.5 Z").unwrap();
        assert_eq!(
            path.ops()[1],
            PathOp::EllipticArc {
                rx: 0.4,
                ry: 0.4,
                x_axis_angle: 0.0,
                large_arc: false,
                sweep: true,
                x: 0.9,
                y: 0.5,
            }
        );
        assert!(matches!(path.ops()[2], PathOp::Curve { .. }));
    }

    #[test]
    fn test_negative_and_exponent_numbers() {
        let path = parse_path_data("M-3.5 -3.5 L3.5e0 -3.5").unwrap();
        assert_eq!(path.ops()[0], PathOp::Move { x: -3.5, y: -3.5 });
        assert_eq!(path.ops()[1], PathOp::Line { x: 3.5, y: -3.5 });
    }

    #[test]
    fn test_rejects_unknown_commands_and_bad_arity() {
        assert!(parse_path_data("Q1 1 2 2").is_none());
        assert!(parse_path_data("M0 0 L1").is_none());
        assert!(parse_path_data("").is_none());
        assert!(parse_path_data("not a path").is_none());
    }
}
