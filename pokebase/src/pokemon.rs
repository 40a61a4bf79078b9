use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub name: String,
    #[serde(rename = "dexNumber")]
    pub id: Id,
    #[serde(default, rename = "regionalDexNumber")]
    pub regional_number: Option<u32>,
    pub types: Types,
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// The national Pokédex number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(pub(crate) u32);

impl Id {
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    pub fn number(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Type {
    Grass,
    Ground,
    Fire,
    Fighting,
    Water,
    Steel,
    Normal,
    Flying,
    Bug,
    Electric,
    Psychic,
    Poison,
    Rock,
    Ghost,
    Dark,
    Fairy,
    Dragon,
    Ice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Type>", into = "Vec<Type>")]
pub struct Types {
    pub primary: Type,
    pub secondary: Option<Type>,
}

impl Types {
    pub fn iter(self) -> impl Iterator<Item = Type> {
        std::iter::once(self.primary).chain(self.secondary)
    }
}

impl TryFrom<Vec<Type>> for Types {
    type Error = String;

    fn try_from(types: Vec<Type>) -> Result<Self, Self::Error> {
        match types.as_slice() {
            [primary] => Ok(Self {
                primary: *primary,
                secondary: None,
            }),
            [primary, secondary] => Ok(Self {
                primary: *primary,
                secondary: Some(*secondary),
            }),
            _ => Err(format!("expected one or two types, found {}", types.len())),
        }
    }
}

impl From<Types> for Vec<Type> {
    fn from(types: Types) -> Self {
        types.iter().collect()
    }
}

/// Where a Pokémon can be found. May contain inline markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(String);

impl Location {
    /// Returns the location with markup tags removed and entities decoded.
    pub fn plain(&self) -> String {
        let mut plain = String::with_capacity(self.0.len());
        let mut rest = self.0.as_str();

        while let Some(c) = rest.chars().next() {
            match c {
                '<' if starts_tag(&rest[1..]) => match rest.find('>') {
                    Some(end) => rest = &rest[end + 1..],
                    None => {
                        plain.push_str(rest);
                        break;
                    }
                },
                '&' => {
                    let decoded = rest.find(';').and_then(|end| {
                        let character = match &rest[1..end] {
                            "amp" => '&',
                            "lt" => '<',
                            "gt" => '>',
                            "quot" => '"',
                            "#39" | "apos" => '\'',
                            "nbsp" => ' ',
                            "eacute" => 'é',
                            _ => None?,
                        };

                        Some((character, end))
                    });

                    match decoded {
                        Some((character, end)) => {
                            plain.push(character);
                            rest = &rest[end + 1..];
                        }
                        None => {
                            plain.push('&');
                            rest = &rest[1..];
                        }
                    }
                }
                _ => {
                    plain.push(c);
                    rest = &rest[c.len_utf8()..];
                }
            }
        }

        plain
    }
}

/// Whether the text following a `<` opens a tag, a closing tag or a comment.
fn starts_tag(after: &str) -> bool {
    after
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '/' || c == '!')
}

impl From<&str> for Location {
    fn from(location: &str) -> Self {
        Self(location.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_camel_case_entries() {
        let pokemon: Pokemon = serde_json::from_str(
            r#"{
                "name": "Turtwig",
                "sprite": "ignored",
                "types": ["grass"],
                "dexNumber": 387,
                "regionalDexNumber": 1,
                "locations": ["Lake Verity"]
            }"#,
        )
        .unwrap();

        assert_eq!(pokemon.id, Id::new(387));
        assert_eq!(pokemon.regional_number, Some(1));
        assert_eq!(pokemon.types.primary, Type::Grass);
        assert_eq!(pokemon.types.secondary, None);
        assert_eq!(pokemon.locations, vec![Location::from("Lake Verity")]);
    }

    #[test]
    fn null_regional_number_is_absent() {
        let pokemon: Pokemon = serde_json::from_str(
            r#"{ "name": "Bulbasaur", "types": ["grass", "poison"], "dexNumber": 1, "regionalDexNumber": null, "locations": [] }"#,
        )
        .unwrap();

        assert_eq!(pokemon.regional_number, None);
        assert_eq!(
            pokemon.types.iter().collect::<Vec<_>>(),
            vec![Type::Grass, Type::Poison]
        );
    }

    #[test]
    fn types_must_be_one_or_two() {
        assert!(serde_json::from_str::<Types>("[]").is_err());
        assert!(serde_json::from_str::<Types>(r#"["fire", "water", "ice"]"#).is_err());
        assert!(serde_json::from_str::<Types>(r#"["shadow"]"#).is_err());
    }

    #[test]
    fn plain_location_strips_markup() {
        assert_eq!(
            Location::from("Gift from <b>Professor Rowan</b> &amp; Dawn").plain(),
            "Gift from Professor Rowan & Dawn"
        );
        assert_eq!(Location::from("Route 201").plain(), "Route 201");
        assert_eq!(Location::from("Pok&eacute;mon Center").plain(), "Pokémon Center");
        assert_eq!(Location::from("R&D <unclosed").plain(), "R&D <unclosed");
        assert_eq!(Location::from("Route 1<br/>Route 2").plain(), "Route 1Route 2");
        assert_eq!(Location::from("<!-- hidden -->Route 3").plain(), "Route 3");
    }

    #[test]
    fn plain_location_keeps_comparisons() {
        assert_eq!(
            Location::from("Level < 20 or > 30").plain(),
            "Level < 20 or > 30"
        );
        assert_eq!(Location::from("<3 hearts").plain(), "<3 hearts");
        assert_eq!(Location::from("a <").plain(), "a <");
    }
}
