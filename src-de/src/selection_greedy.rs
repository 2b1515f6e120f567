use crate::error::EvolutionError;
use crate::individual::Individual;
use crate::strategies::SelectionStrategy;

/// Picks the candidate with the lowest fitness. Ties go to the later
/// candidate, so a child that merely matches its parent replaces it.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySelection;

impl SelectionStrategy for GreedySelection {
    fn select<'a>(
        &mut self,
        candidates: &[&'a Individual],
    ) -> Result<&'a Individual, EvolutionError> {
        let mut winner = *candidates.first().ok_or(EvolutionError::EmptySelectionPool)?;
        for &candidate in &candidates[1..] {
            if fitness_or_worst(candidate) <= fitness_or_worst(winner) {
                winner = candidate;
            }
        }
        Ok(winner)
    }
}

// an unevaluated candidate loses against any scored one
fn fitness_or_worst(individual: &Individual) -> f64 {
    individual.fitness().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn scored(fitness: f64) -> Individual {
        let mut individual = Individual::new(array![0.0]);
        individual.set_fitness(fitness);
        individual
    }

    #[test]
    fn test_lowest_fitness_wins() {
        let worse = scored(4.0);
        let better = scored(1.0);
        let mut selection = GreedySelection;

        let winner = selection.select(&[&worse, &better]).unwrap();
        assert!(std::ptr::eq(winner, &better));

        let winner = selection.select(&[&better, &worse]).unwrap();
        assert!(std::ptr::eq(winner, &better));
    }

    #[test]
    fn test_tie_goes_to_the_later_candidate() {
        let original = scored(2.0);
        let child = scored(2.0);
        let mut selection = GreedySelection;

        let winner = selection.select(&[&original, &child]).unwrap();
        assert!(std::ptr::eq(winner, &child));
    }

    #[test]
    fn test_unevaluated_candidate_loses() {
        let unevaluated = Individual::new(array![0.0]);
        let evaluated = scored(1e9);
        let mut selection = GreedySelection;

        let winner = selection.select(&[&unevaluated, &evaluated]).unwrap();
        assert!(std::ptr::eq(winner, &evaluated));
    }

    #[test]
    fn test_empty_pool_is_an_error() {
        let mut selection = GreedySelection;
        assert!(matches!(selection.select(&[]), Err(EvolutionError::EmptySelectionPool)));
    }
}
