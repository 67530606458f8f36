use std::fmt;
use std::str::FromStr;

use crate::cases::errors::CaseError;
use crate::cases::traits::{CaseIterable, RawRepresentable, parse_case};

/// Compass directions. Cases are values in their own right and carry no
/// implicit integer; the raw value is the lowercase case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl CaseIterable for Direction {
    const ALL_CASES: &'static [Self] = &[
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];
}

impl RawRepresentable for Direction {
    type Raw = &'static str;

    fn raw_value(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::West => "west",
            Direction::East => "east",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.raw_value())
    }
}

impl FromStr for Direction {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_case(s, "direction")
    }
}

/// Planets in order from the sun; raw values count up from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury = 1,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl CaseIterable for Planet {
    const ALL_CASES: &'static [Self] = &[
        Planet::Mercury,
        Planet::Venus,
        Planet::Earth,
        Planet::Mars,
        Planet::Jupiter,
        Planet::Saturn,
        Planet::Uranus,
        Planet::Neptune,
    ];
}

impl RawRepresentable for Planet {
    type Raw = i32;

    fn raw_value(&self) -> i32 {
        *self as i32
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Earth => "earth",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Planet {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_case(s, "planet")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Beverage {
    Coffee,
    Tea,
    Juice,
}

impl CaseIterable for Beverage {
    const ALL_CASES: &'static [Self] = &[Beverage::Coffee, Beverage::Tea, Beverage::Juice];
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Beverage::Coffee => write!(f, "coffee"),
            Beverage::Tea => write!(f, "tea"),
            Beverage::Juice => write!(f, "juice"),
        }
    }
}

impl FromStr for Beverage {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_case(s, "beverage")
    }
}

/// ASCII control characters keyed by their character raw value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlCharacter {
    Tab,
    LineFeed,
    CarriageReturn,
}

impl CaseIterable for ControlCharacter {
    const ALL_CASES: &'static [Self] = &[
        ControlCharacter::Tab,
        ControlCharacter::LineFeed,
        ControlCharacter::CarriageReturn,
    ];
}

impl RawRepresentable for ControlCharacter {
    type Raw = char;

    fn raw_value(&self) -> char {
        match self {
            ControlCharacter::Tab => '\t',
            ControlCharacter::LineFeed => '\n',
            ControlCharacter::CarriageReturn => '\r',
        }
    }
}

impl fmt::Display for ControlCharacter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ControlCharacter::Tab => write!(f, "tab"),
            ControlCharacter::LineFeed => write!(f, "line feed"),
            ControlCharacter::CarriageReturn => write!(f, "carriage return"),
        }
    }
}

impl FromStr for ControlCharacter {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_case(s, "control character")
    }
}
