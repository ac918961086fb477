use rand::{Rng, distr::StandardUniform, prelude::Distribution};

use super::pattern::CellPattern;

/// Enum representing the type of shape template.
///
/// The catalog is a closed set of 7 variants with fixed cell layouts. The
/// kind also serves as the color tag: render layers map each kind to its own
/// style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ShapeKind {
    /// I-shape.
    I = 0,
    /// O-shape.
    O = 1,
    /// T-shape.
    T = 2,
    /// S-shape.
    S = 3,
    /// Z-shape.
    Z = 4,
    /// J-shape.
    J = 5,
    /// L-shape.
    L = 6,
}

impl Distribution<ShapeKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> ShapeKind {
        match rng.random_range(0..=6) {
            0 => ShapeKind::I,
            1 => ShapeKind::O,
            2 => ShapeKind::T,
            3 => ShapeKind::S,
            4 => ShapeKind::Z,
            5 => ShapeKind::J,
            _ => ShapeKind::L,
        }
    }
}

impl ShapeKind {
    /// Number of shape kinds (7).
    pub const LEN: usize = 7;

    /// All shape kinds in catalog order.
    pub const ALL: [ShapeKind; Self::LEN] = [
        ShapeKind::I,
        ShapeKind::O,
        ShapeKind::T,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::J,
        ShapeKind::L,
    ];

    /// Returns this kind's template pattern in spawn orientation.
    #[must_use]
    pub fn template(self) -> CellPattern {
        let rows = TEMPLATES[self as usize]
            .iter()
            .map(|row| row.to_vec())
            .collect();
        CellPattern::from_rows(rows)
    }

    /// Returns the single character representation of this shape kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            ShapeKind::I => 'I',
            ShapeKind::O => 'O',
            ShapeKind::T => 'T',
            ShapeKind::S => 'S',
            ShapeKind::Z => 'Z',
            ShapeKind::J => 'J',
            ShapeKind::L => 'L',
        }
    }

    /// Parses a shape kind from a single character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'I' => Some(ShapeKind::I),
            'O' => Some(ShapeKind::O),
            'T' => Some(ShapeKind::T),
            'S' => Some(ShapeKind::S),
            'Z' => Some(ShapeKind::Z),
            'J' => Some(ShapeKind::J),
            'L' => Some(ShapeKind::L),
            _ => None,
        }
    }
}

const TEMPLATES: [&[&[bool]]; ShapeKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    [
        // I-shape
        &[&[C, C, C, C]],
        // O-shape
        &[&[C, C], &[C, C]],
        // T-shape
        &[&[E, C, E], &[C, C, C]],
        // S-shape
        &[&[E, C, C], &[C, C, E]],
        // Z-shape
        &[&[C, C, E], &[E, C, C]],
        // J-shape
        &[&[C, E, E], &[C, C, C]],
        // L-shape
        &[&[E, E, C], &[C, C, C]],
    ]
};

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg32;

    use super::*;

    #[test]
    fn test_template_dimensions() {
        assert_eq!(ShapeKind::I.template().width(), 4);
        assert_eq!(ShapeKind::I.template().height(), 1);
        assert_eq!(ShapeKind::O.template().width(), 2);
        assert_eq!(ShapeKind::O.template().height(), 2);
        for kind in [
            ShapeKind::T,
            ShapeKind::S,
            ShapeKind::Z,
            ShapeKind::J,
            ShapeKind::L,
        ] {
            assert_eq!(kind.template().width(), 3, "{kind:?}");
            assert_eq!(kind.template().height(), 2, "{kind:?}");
        }
    }

    #[test]
    fn test_every_template_has_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(
                kind.template().filled_offsets().count(),
                4,
                "{kind:?} must cover exactly four cells"
            );
        }
    }

    #[test]
    fn test_t_template_layout() {
        let expected = CellPattern::from_ascii(
            r"
            .#.
            ###
            ",
        );
        assert_eq!(ShapeKind::T.template(), expected);
    }

    #[test]
    fn test_char_conversion_round_trip() {
        for kind in ShapeKind::ALL {
            assert_eq!(ShapeKind::from_char(kind.as_char()), Some(kind));
        }
        assert_eq!(ShapeKind::from_char('X'), None);
        assert_eq!(ShapeKind::from_char('i'), None);
    }

    #[test]
    fn test_uniform_sampling_covers_all_kinds() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = [false; ShapeKind::LEN];
        for _ in 0..1000 {
            let kind: ShapeKind = rng.random();
            seen[kind as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "all 7 kinds should appear: {seen:?}");
    }
}
