use crate::weather::CurrentConditions;

/// Which side of a comparison is warmer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warmer {
    First,
    Second,
}

/// Current conditions of two cities side by side
#[derive(Debug, Clone, PartialEq)]
pub struct CityComparison {
    pub first: CurrentConditions,
    pub second: CurrentConditions,
    /// Absolute temperature difference in °C
    pub difference: i32,
    /// `None` when both temperatures are equal
    pub warmer: Option<Warmer>,
}

impl CityComparison {
    pub fn new(first: CurrentConditions, second: CurrentConditions) -> Self {
        let delta = first.temperature - second.temperature;
        let warmer = match delta {
            d if d > 0 => Some(Warmer::First),
            d if d < 0 => Some(Warmer::Second),
            _ => None,
        };

        Self {
            first,
            second,
            difference: delta.abs(),
            warmer,
        }
    }

    /// Warmer city first, colder second; `None` on a tie
    pub fn ranked(&self) -> Option<(&CurrentConditions, &CurrentConditions)> {
        self.warmer.map(|warmer| match warmer {
            Warmer::First => (&self.first, &self.second),
            Warmer::Second => (&self.second, &self.first),
        })
    }
}
