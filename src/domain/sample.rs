//! Fixed demonstration dataset and its summary statistics.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SamplePerson {
    pub name: &'static str,
    pub age: u32,
    pub city: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeStatistics {
    pub mean_age: f64,
    pub max_age: u32,
    pub min_age: u32,
}

const SAMPLE_PEOPLE: [SamplePerson; 4] = [
    SamplePerson {
        name: "Alice",
        age: 25,
        city: "NYC",
    },
    SamplePerson {
        name: "Bob",
        age: 30,
        city: "LA",
    },
    SamplePerson {
        name: "Charlie",
        age: 35,
        city: "Chicago",
    },
    SamplePerson {
        name: "Diana",
        age: 28,
        city: "Seattle",
    },
];

pub fn sample_people() -> Vec<SamplePerson> {
    SAMPLE_PEOPLE.to_vec()
}

/// Returns `None` for an empty dataset.
pub fn age_statistics(people: &[SamplePerson]) -> Option<AgeStatistics> {
    let max_age = people.iter().map(|person| person.age).max()?;
    let min_age = people.iter().map(|person| person.age).min()?;
    let sum: u64 = people.iter().map(|person| u64::from(person.age)).sum();

    Some(AgeStatistics {
        mean_age: sum as f64 / people.len() as f64,
        max_age,
        min_age,
    })
}
