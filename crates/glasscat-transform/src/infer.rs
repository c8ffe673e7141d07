//! Categorical inference from free-text descriptions.
//!
//! `parabrisas` (windshield) implies a front position, `luneta` (rear
//! window) a rear one; `izq`/`der` substrings drive the side. No match
//! leaves the field unknown rather than guessed.

use glasscat_model::{Position, Side};

pub fn infer_position(description: &str) -> Position {
    let desc = description.to_lowercase();
    if desc.contains("parabrisas") {
        Position::Delantero
    } else if desc.contains("luneta") {
        Position::Trasero
    } else {
        Position::Unknown
    }
}

pub fn infer_side(description: &str) -> Side {
    let desc = description.to_lowercase();
    if desc.contains("izq") {
        Side::Izquierda
    } else if desc.contains("der") {
        Side::Derecha
    } else {
        Side::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_drive_position() {
        assert_eq!(infer_position("Parabrisas DER templado"), Position::Delantero);
        assert_eq!(infer_position("LUNETA TRASERA"), Position::Trasero);
        assert_eq!(infer_position("PUERTA TRAS.IZQ."), Position::Unknown);
    }

    #[test]
    fn keywords_drive_side() {
        assert_eq!(infer_side("PUERTA TRAS.IZQ."), Side::Izquierda);
        assert_eq!(infer_side("Parabrisas DER templado"), Side::Derecha);
        assert_eq!(infer_side("LUNETA"), Side::Unknown);
    }
}
