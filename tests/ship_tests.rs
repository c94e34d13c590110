use battleships::{convert_position, BoardError, Orientation, Point, Ship};

#[test]
fn test_convert_position_examples() {
    assert_eq!(convert_position("C6"), Ok(Point::new(2, 5)));
    assert_eq!(convert_position("A1"), Ok(Point::new(0, 0)));
    assert_eq!(convert_position("I9"), Ok(Point::new(8, 8)));
    assert_eq!(convert_position("Z26"), Ok(Point::new(25, 25)));
}

#[test]
fn test_parse_is_case_and_space_insensitive() {
    assert_eq!(" c6 ".parse::<Point>(), Ok(Point::new(2, 5)));
    assert_eq!("b10".parse::<Point>(), Ok(Point::new(1, 9)));
}

#[test]
fn test_parse_rejects_malformed_input() {
    for bad in ["", "C", "6C", "CC", "C6x", "C-6", "C+6", "1", "?3", "É2", "C 6", "C0"] {
        assert_eq!(
            bad.parse::<Point>(),
            Err(BoardError::InvalidPosition(bad.trim().to_string())),
            "{:?} should not parse",
            bad
        );
    }
}

#[test]
fn test_parse_does_not_bound_check() {
    // Out-of-grid positions parse fine; the board rejects them later.
    assert_eq!("Z99".parse::<Point>(), Ok(Point::new(25, 98)));
}

#[test]
fn test_position_round_trip() {
    let p = Point::new(2, 5);
    assert_eq!(p.to_string(), "C6");
    assert_eq!(convert_position(&p.to_string()), Ok(p));
}

#[test]
fn test_orientation_parse() {
    assert_eq!("H".parse::<Orientation>(), Ok(Orientation::Horizontal));
    assert_eq!(" v".parse::<Orientation>(), Ok(Orientation::Vertical));
    assert_eq!(
        "diagonal".parse::<Orientation>(),
        Err(BoardError::InvalidOrientation("diagonal".to_string()))
    );
    assert!("".parse::<Orientation>().is_err());
}

#[test]
fn test_ship_cells_and_end() {
    let ship = Ship::new(Point::new(3, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Point::new(3, 1), Point::new(3, 2), Point::new(3, 3)]
    );
    assert_eq!(ship.end(), Point::new(3, 3));
    assert!(ship.contains(Point::new(3, 2)));
    assert!(!ship.contains(Point::new(3, 4)));
    assert!(!ship.contains(Point::new(2, 2)));
    assert_eq!(ship.to_string(), "D2H (3)");
}

#[test]
fn test_ship_value_equality() {
    let a = Ship::new(Point::new(0, 0), 2, Orientation::Vertical);
    let b = Ship::new(Point::new(0, 0), 2, Orientation::Vertical);
    let c = Ship::new(Point::new(0, 0), 2, Orientation::Horizontal);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
