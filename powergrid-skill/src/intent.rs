//! The closed set of intents the skill answers.

use std::fmt;
use std::str::FromStr;

use shared::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Efficiency,
    Sprinklers,
    Sectors,
    Sandstorm,
    Help,
    Stop,
    Cancel,
    Noop,
}

impl Intent {
    pub const ALL: [Intent; 8] = [
        Intent::Efficiency,
        Intent::Sprinklers,
        Intent::Sectors,
        Intent::Sandstorm,
        Intent::Help,
        Intent::Stop,
        Intent::Cancel,
        Intent::Noop,
    ];

    /// Name as it appears in the interaction model.
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Efficiency => "Efficiency",
            Intent::Sprinklers => "Sprinklers",
            Intent::Sectors => "Sectors",
            Intent::Sandstorm => "Sandstorm",
            Intent::Help => "AMAZON.HelpIntent",
            Intent::Stop => "AMAZON.StopIntent",
            Intent::Cancel => "AMAZON.CancelIntent",
            Intent::Noop => "Noop",
        }
    }
}

impl FromStr for Intent {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Intent::ALL
            .into_iter()
            .find(|intent| intent.as_str() == name)
            .ok_or_else(|| Error::InvalidIntent(name.to_string()))
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_name() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>().unwrap(), intent);
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert!(matches!(
            "efficiency".parse::<Intent>(),
            Err(Error::InvalidIntent(name)) if name == "efficiency"
        ));
        assert!("Help".parse::<Intent>().is_err());
        assert!("".parse::<Intent>().is_err());
    }
}
