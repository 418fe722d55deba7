use racetime_core::models::{RaceEntry, SeedEntry};
use racetime_core::{PrecisePeriod, PreciseTime};

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("ID was not found: {0}")]
    NotFound(u32),

    #[error("Invalid entry: {0}")]
    Invalid(#[from] racetime_core::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;

/// How the first entry of a comparison finished relative to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Same,
    Faster,
    Slower,
}

#[derive(Debug, Clone)]
pub struct Comparison {
    pub first: RaceEntry,
    pub second: RaceEntry,
    pub outcome: Outcome,
    pub gap: PrecisePeriod,
}

/// Race entries in insertion order, with ids from a counter that starts
/// at 1 and never hands out the same id twice.
#[derive(Debug, Default)]
pub struct RaceRegistry {
    entries: Vec<RaceEntry>,
    last_id: u32,
}

impl RaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        given_name: &str,
        family_name: &str,
        finish: PreciseTime,
    ) -> Result<&RaceEntry> {
        let entry = RaceEntry::new(self.last_id + 1, given_name, family_name, finish);
        entry.validate()?;

        self.last_id = entry.id;
        tracing::info!("Added race entry {} ({})", entry.id, entry.full_name());
        self.entries.push(entry);

        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Parse `finish` and add the entry.
    pub fn add_parsed(
        &mut self,
        given_name: &str,
        family_name: &str,
        finish: &str,
    ) -> Result<&RaceEntry> {
        let finish = PreciseTime::parse(finish)?;
        self.add(given_name, family_name, finish)
    }

    /// Add every seed, or none of them if any is invalid.
    pub fn seed(&mut self, seeds: &[SeedEntry]) -> Result<usize> {
        for seed in seeds {
            seed.validate()?;
        }
        for seed in seeds {
            self.add(&seed.given_name, &seed.family_name, seed.finish)?;
        }
        tracing::debug!("Seeded {} race entries", seeds.len());
        Ok(seeds.len())
    }

    pub fn remove(&mut self, id: u32) -> Result<RaceEntry> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(RegistryError::NotFound(id))?;

        let entry = self.entries.remove(position);
        tracing::info!("Removed race entry {} ({})", entry.id, entry.full_name());
        Ok(entry)
    }

    pub fn get(&self, id: u32) -> Result<&RaceEntry> {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .ok_or(RegistryError::NotFound(id))
    }

    pub fn entries(&self) -> &[RaceEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compare the finish times of two entries, from the first one's view.
    pub fn compare(&self, first_id: u32, second_id: u32) -> Result<Comparison> {
        let first = self.get(first_id)?.clone();
        let second = self.get(second_id)?.clone();

        let outcome = match first.finish.compare(&second.finish) {
            std::cmp::Ordering::Equal => Outcome::Same,
            std::cmp::Ordering::Less => Outcome::Faster,
            std::cmp::Ordering::Greater => Outcome::Slower,
        };
        let gap = PrecisePeriod::between(first.finish, second.finish);

        tracing::debug!(
            "Compared entries {} and {}: {:?} by {}",
            first_id,
            second_id,
            outcome,
            gap
        );

        Ok(Comparison {
            first,
            second,
            outcome,
            gap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(text: &str) -> PreciseTime {
        text.parse().unwrap()
    }

    #[test]
    fn test_ids_start_at_one() {
        let mut registry = RaceRegistry::new();
        assert!(registry.is_empty());

        let id = registry.add("Adam", "Nowak", time("2:34:56:345")).unwrap().id;
        assert_eq!(id, 1);
        let id = registry.add("Ewa", "Nowak", time("2:00:00:000")).unwrap().id;
        assert_eq!(id, 2);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut registry = RaceRegistry::new();
        registry.add("A", "A", time("1:00:00:000")).unwrap();
        registry.add("B", "B", time("1:00:00:000")).unwrap();

        registry.remove(2).unwrap();
        let id = registry.add("C", "C", time("1:00:00:000")).unwrap().id;
        assert_eq!(id, 3);
    }

    #[test]
    fn test_rejected_entry_does_not_consume_id() {
        let mut registry = RaceRegistry::new();
        assert!(registry.add_parsed("A", "A", "25:00:00:000").is_err());
        assert!(registry.add("A", "A B", time("1:00:00:000")).is_err());

        let id = registry.add_parsed("A", "A", "1:00:00:000").unwrap().id;
        assert_eq!(id, 1);
    }

    #[test]
    fn test_seed_is_all_or_nothing() {
        let mut seeds = SeedEntry::samples();
        seeds[3].family_name = "Van Damme".to_string();

        let mut registry = RaceRegistry::new();
        assert!(matches!(
            registry.seed(&seeds),
            Err(RegistryError::Invalid(_))
        ));
        assert!(registry.is_empty());

        let id = registry.add("A", "A", time("1:00:00:000")).unwrap().id;
        assert_eq!(id, 1);
    }

    #[test]
    fn test_remove_missing() {
        let mut registry = RaceRegistry::new();
        assert!(matches!(registry.remove(7), Err(RegistryError::NotFound(7))));
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut registry = RaceRegistry::new();
        registry.seed(&SeedEntry::samples()).unwrap();
        registry.remove(3).unwrap();

        let ids: Vec<u32> = registry.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 5, 6]);
    }

    #[test]
    fn test_compare_slower() {
        let mut registry = RaceRegistry::new();
        registry.seed(&SeedEntry::samples()).unwrap();

        let comparison = registry.compare(2, 3).unwrap();
        assert_eq!(comparison.outcome, Outcome::Slower);
        assert_eq!(comparison.gap.to_string(), "0:26:16:877");

        let reverse = registry.compare(3, 2).unwrap();
        assert_eq!(reverse.outcome, Outcome::Faster);
        assert_eq!(reverse.gap, comparison.gap);
    }

    #[test]
    fn test_compare_same() {
        let mut registry = RaceRegistry::new();
        registry.add("A", "A", time("1:00:00:000")).unwrap();
        registry.add("B", "B", time("01:00:00:000")).unwrap();

        let comparison = registry.compare(1, 2).unwrap();
        assert_eq!(comparison.outcome, Outcome::Same);
        assert!(comparison.gap.is_zero());
    }

    #[test]
    fn test_compare_missing() {
        let mut registry = RaceRegistry::new();
        registry.add("A", "A", time("1:00:00:000")).unwrap();
        assert!(matches!(
            registry.compare(1, 9),
            Err(RegistryError::NotFound(9))
        ));
    }
}
