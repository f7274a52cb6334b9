use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three constitutional categories.
///
/// Declaration order is significant: it is the tie-break order used when two
/// categories share the same percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

impl Dosha {
    /// All categories in tie-break order.
    pub const ALL: [Dosha; 3] = [Dosha::Vata, Dosha::Pitta, Dosha::Kapha];

    /// Parse an answer value. Matching is exact: "Vata" or " vata" are not recognized.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "vata" => Some(Dosha::Vata),
            "pitta" => Some(Dosha::Pitta),
            "kapha" => Some(Dosha::Kapha),
            _ => None,
        }
    }

    /// Lowercase wire name ("vata", "pitta", "kapha")
    pub fn as_str(&self) -> &'static str {
        match self {
            Dosha::Vata => "vata",
            Dosha::Pitta => "pitta",
            Dosha::Kapha => "kapha",
        }
    }

    /// Name with the first letter capitalized, used in constitution labels
    pub fn display_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Dosha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value per category, serialized as `{ "vata": .., "pitta": .., "kapha": .. }`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaMap<T> {
    pub vata: T,
    pub pitta: T,
    pub kapha: T,
}

impl<T: Copy> DoshaMap<T> {
    pub fn get(&self, dosha: Dosha) -> T {
        match dosha {
            Dosha::Vata => self.vata,
            Dosha::Pitta => self.pitta,
            Dosha::Kapha => self.kapha,
        }
    }
}

impl<T> DoshaMap<T> {
    pub fn get_mut(&mut self, dosha: Dosha) -> &mut T {
        match dosha {
            Dosha::Vata => &mut self.vata,
            Dosha::Pitta => &mut self.pitta,
            Dosha::Kapha => &mut self.kapha,
        }
    }

    /// Build a map by evaluating `f` for each category in declaration order.
    pub fn from_fn(mut f: impl FnMut(Dosha) -> T) -> Self {
        Self {
            vata: f(Dosha::Vata),
            pitta: f(Dosha::Pitta),
            kapha: f(Dosha::Kapha),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exact_names() {
        assert_eq!(Dosha::parse("vata"), Some(Dosha::Vata));
        assert_eq!(Dosha::parse("pitta"), Some(Dosha::Pitta));
        assert_eq!(Dosha::parse("kapha"), Some(Dosha::Kapha));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(Dosha::parse("Vata"), None);
        assert_eq!(Dosha::parse("PITTA"), None);
        assert_eq!(Dosha::parse(" kapha"), None);
        assert_eq!(Dosha::parse(""), None);
    }

    #[test]
    fn test_display_name_capitalizes_first_letter() {
        assert_eq!(Dosha::Vata.display_name(), "Vata");
        assert_eq!(Dosha::Pitta.display_name(), "Pitta");
        assert_eq!(Dosha::Kapha.display_name(), "Kapha");
    }

    #[test]
    fn test_all_is_declaration_order() {
        assert_eq!(Dosha::ALL, [Dosha::Vata, Dosha::Pitta, Dosha::Kapha]);
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Dosha::Pitta).unwrap(), "\"pitta\"");
        let map = DoshaMap { vata: 1, pitta: 2, kapha: 3 };
        assert_eq!(
            serde_json::to_string(&map).unwrap(),
            r#"{"vata":1,"pitta":2,"kapha":3}"#
        );
    }

    #[test]
    fn test_get_mut_targets_one_field() {
        let mut map: DoshaMap<u32> = DoshaMap::default();
        *map.get_mut(Dosha::Kapha) += 2;
        assert_eq!(map, DoshaMap { vata: 0, pitta: 0, kapha: 2 });
    }
}
