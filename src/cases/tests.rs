use crate::cases::{
    Barcode, Beverage, CaseError, CaseIterable, ControlCharacter, Direction, Planet,
    RawRepresentable,
};

#[test]
fn test_beverage_case_count() {
    assert_eq!(Beverage::case_count(), 3);
    let names: Vec<String> = Beverage::all_cases().map(|b| b.to_string()).collect();
    assert_eq!(names, vec!["coffee", "tea", "juice"]);
}

#[test]
fn test_all_cases_in_declaration_order() {
    let directions: Vec<Direction> = Direction::all_cases().copied().collect();
    assert_eq!(
        directions,
        vec![
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East
        ]
    );
    assert_eq!(Planet::case_count(), 8);
    assert_eq!(Planet::ALL_CASES.first(), Some(&Planet::Mercury));
    assert_eq!(Planet::ALL_CASES.last(), Some(&Planet::Neptune));
}

#[test]
fn test_planet_raw_values_count_from_one() {
    assert_eq!(Planet::Mercury.raw_value(), 1);
    assert_eq!(Planet::Earth.raw_value(), 3);
    assert_eq!(Planet::Neptune.raw_value(), 8);
    for (index, planet) in Planet::all_cases().enumerate() {
        assert_eq!(planet.raw_value() as usize, index + 1);
    }
}

#[test]
fn test_planet_lookup_by_raw_value() {
    assert_eq!(Planet::from_raw_value(7), Some(Planet::Uranus));
    assert_eq!(Planet::from_raw_value(11), None);
    assert_eq!(Planet::from_raw_value(0), None);
    assert_eq!(Planet::from_raw_value(-3), None);
}

#[test]
fn test_raw_value_lookup_inverts_raw_value() {
    for direction in Direction::all_cases() {
        assert_eq!(
            Direction::from_raw_value(direction.raw_value()),
            Some(*direction)
        );
    }
    for control in ControlCharacter::all_cases() {
        assert_eq!(
            ControlCharacter::from_raw_value(control.raw_value()),
            Some(*control)
        );
    }
}

#[test]
fn test_control_character_raw_values() {
    assert_eq!(ControlCharacter::Tab.raw_value(), '\t');
    assert_eq!(ControlCharacter::LineFeed.raw_value(), '\n');
    assert_eq!(ControlCharacter::CarriageReturn.raw_value(), '\r');
    assert_eq!(ControlCharacter::from_raw_value('a'), None);
}

#[test]
fn test_direction_has_implicit_string_raw_value() {
    assert_eq!(Direction::West.raw_value(), "west");
    assert_eq!(Direction::from_raw_value("up"), None);
}

#[test]
fn test_parse_case_names() {
    assert_eq!("north".parse::<Direction>(), Ok(Direction::North));
    assert_eq!(" Saturn ".parse::<Planet>(), Ok(Planet::Saturn));
    assert_eq!("TEA".parse::<Beverage>(), Ok(Beverage::Tea));
    assert_eq!(
        "line feed".parse::<ControlCharacter>(),
        Ok(ControlCharacter::LineFeed)
    );
}

#[test]
fn test_parse_unknown_case() {
    let result = "pluto".parse::<Planet>();
    assert_eq!(
        result,
        Err(CaseError::UnknownCase {
            kind: "planet",
            input: String::from("pluto")
        })
    );
    if let Err(e) = result {
        assert_eq!(e.to_string(), "Unknown planet: 'pluto'");
    }
}

#[test]
fn test_barcode_associated_values() {
    let mut product = Barcode::Upc(8, 85909, 51226, 3);
    assert!(product.is_upc());
    assert_eq!(product.to_string(), "UPC: 8, 85909, 51226, 3.");

    product = Barcode::QrCode(String::from("ABCDEFGHIJKLMNOP"));
    assert!(!product.is_upc());
    assert_eq!(product.to_string(), "QR code: ABCDEFGHIJKLMNOP.");
}

#[test]
fn test_barcode_matches_extract_values() {
    let product = Barcode::Upc(8, 85909, 51226, 3);
    match product {
        Barcode::Upc(number_system, manufacturer, _, check) => {
            assert_eq!(number_system, 8);
            assert_eq!(manufacturer, 85909);
            assert_eq!(check, 3);
        }
        Barcode::QrCode(_) => panic!("expected a UPC barcode"),
    }
}
