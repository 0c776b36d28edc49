//! Fixed enumerations behind the form's select boxes.
//!
//! Every categorical value the model was trained on lives here. Serialized
//! names are the display names, which are also the category labels the model
//! artifact is keyed by.

use crate::utils::error::{EduSpendError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

fn parse_named<T: Copy>(field: &str, input: &str, all: &[T], name: fn(T) -> &'static str) -> Result<T> {
    let wanted = input.trim();
    all.iter()
        .copied()
        .find(|v| name(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| {
            let names: Vec<&str> = all.iter().map(|v| name(*v)).collect();
            EduSpendError::invalid_input(
                field,
                format!("unknown value '{}', expected one of: {}", wanted, names.join(", ")),
            )
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "USA")]
    Usa,
    #[serde(rename = "UK")]
    Uk,
    Canada,
    Australia,
}

impl Country {
    pub const ALL: [Country; 4] = [Country::Usa, Country::Uk, Country::Canada, Country::Australia];

    pub fn as_str(self) -> &'static str {
        match self {
            Country::Usa => "USA",
            Country::Uk => "UK",
            Country::Canada => "Canada",
            Country::Australia => "Australia",
        }
    }

    /// The institution currency for this country.
    pub fn base_currency(self) -> Currency {
        match self {
            Country::Usa => Currency::Usd,
            Country::Uk => Currency::Gbp,
            Country::Canada => Currency::Cad,
            Country::Australia => Currency::Aud,
        }
    }

    pub fn cities(self) -> &'static [City] {
        match self {
            Country::Usa => &[City::NewYork, City::LosAngeles, City::Chicago],
            Country::Uk => &[City::London, City::Manchester, City::Edinburgh],
            Country::Canada => &[City::Toronto, City::Vancouver, City::Montreal],
            Country::Australia => &[City::Sydney, City::Melbourne, City::Brisbane],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum City {
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    Chicago,
    London,
    Manchester,
    Edinburgh,
    Toronto,
    Vancouver,
    Montreal,
    Sydney,
    Melbourne,
    Brisbane,
}

impl City {
    pub const ALL: [City; 12] = [
        City::NewYork,
        City::LosAngeles,
        City::Chicago,
        City::London,
        City::Manchester,
        City::Edinburgh,
        City::Toronto,
        City::Vancouver,
        City::Montreal,
        City::Sydney,
        City::Melbourne,
        City::Brisbane,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            City::NewYork => "New York",
            City::LosAngeles => "Los Angeles",
            City::Chicago => "Chicago",
            City::London => "London",
            City::Manchester => "Manchester",
            City::Edinburgh => "Edinburgh",
            City::Toronto => "Toronto",
            City::Vancouver => "Vancouver",
            City::Montreal => "Montreal",
            City::Sydney => "Sydney",
            City::Melbourne => "Melbourne",
            City::Brisbane => "Brisbane",
        }
    }

    pub fn country(self) -> Country {
        match self {
            City::NewYork | City::LosAngeles | City::Chicago => Country::Usa,
            City::London | City::Manchester | City::Edinburgh => Country::Uk,
            City::Toronto | City::Vancouver | City::Montreal => Country::Canada,
            City::Sydney | City::Melbourne | City::Brisbane => Country::Australia,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    Bachelor,
    Master,
    #[serde(rename = "PhD")]
    Phd,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Bachelor, Level::Master, Level::Phd];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Bachelor => "Bachelor",
            Level::Master => "Master",
            Level::Phd => "PhD",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Program {
    Engineering,
    Business,
    Arts,
    Science,
}

impl Program {
    pub const ALL: [Program; 4] = [
        Program::Engineering,
        Program::Business,
        Program::Arts,
        Program::Science,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Program::Engineering => "Engineering",
            Program::Business => "Business",
            Program::Arts => "Arts",
            Program::Science => "Science",
        }
    }
}

/// Currencies accepted by the exchange service and the local-currency selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Gbp,
    Cad,
    Aud,
    Eur,
    Zmw,
    Kes,
    Inr,
    Ngn,
}

impl Currency {
    pub const ALL: [Currency; 9] = [
        Currency::Usd,
        Currency::Gbp,
        Currency::Cad,
        Currency::Aud,
        Currency::Eur,
        Currency::Zmw,
        Currency::Kes,
        Currency::Inr,
        Currency::Ngn,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Aud => "AUD",
            Currency::Eur => "EUR",
            Currency::Zmw => "ZMW",
            Currency::Kes => "KES",
            Currency::Inr => "INR",
            Currency::Ngn => "NGN",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Country {
    type Err = EduSpendError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named("country", s, &Country::ALL, Country::as_str)
    }
}

impl FromStr for City {
    type Err = EduSpendError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named("city", s, &City::ALL, City::as_str)
    }
}

impl FromStr for Level {
    type Err = EduSpendError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named("level", s, &Level::ALL, Level::as_str)
    }
}

impl FromStr for Program {
    type Err = EduSpendError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named("program", s, &Program::ALL, Program::as_str)
    }
}

impl FromStr for Currency {
    type Err = EduSpendError;

    fn from_str(s: &str) -> Result<Self> {
        parse_named("currency", s, &Currency::ALL, Currency::code)
    }
}
