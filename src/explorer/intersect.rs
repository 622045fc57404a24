use std::collections::HashSet;

use crate::client::types::MealSummary;

/// Reduces per-ingredient result lists to the meals present in all of them.
///
/// Meals are matched by id, not by value, since each request serializes its
/// own copy. The reduction runs left to right and only ever filters the
/// accumulator, so the output keeps the order of the first list.
pub fn intersect_by_id(result_sets: Vec<Vec<MealSummary>>) -> Vec<MealSummary> {
    let mut sets = result_sets.into_iter();
    let Some(mut common) = sets.next() else {
        return Vec::new();
    };

    for other in sets {
        if common.is_empty() {
            break;
        }
        let ids: HashSet<&str> = other.iter().map(|meal| meal.id.as_str()).collect();
        common.retain(|meal| ids.contains(meal.id.as_str()));
    }

    common
}

/// True when some operand is empty, which makes the intersection empty
/// without reducing.
pub fn has_empty_operand(result_sets: &[Vec<MealSummary>]) -> bool {
    result_sets.iter().any(Vec::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn meal(id: &str) -> MealSummary {
        MealSummary {
            id: id.to_string(),
            name: format!("Meal {}", id),
            thumbnail: None,
        }
    }

    fn ids(meals: &[MealSummary]) -> Vec<&str> {
        meals.iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn keeps_first_list_order() {
        let result = intersect_by_id(vec![
            vec![meal("3"), meal("1"), meal("2"), meal("4")],
            vec![meal("4"), meal("2"), meal("3")],
            vec![meal("2"), meal("3"), meal("9")],
        ]);
        assert_eq!(ids(&result), vec!["3", "2"]);
    }

    #[test]
    fn matches_by_id_not_value() {
        let mut renamed = meal("7");
        renamed.name = "Same meal, other payload".to_string();
        renamed.thumbnail = Some("https://example.com/7.jpg".to_string());

        let result = intersect_by_id(vec![vec![meal("7"), meal("8")], vec![renamed]]);
        assert_eq!(result, vec![meal("7")]);
    }

    #[test]
    fn single_list_is_returned_as_is() {
        let result = intersect_by_id(vec![vec![meal("b"), meal("a")]]);
        assert_eq!(ids(&result), vec!["b", "a"]);
    }

    #[test]
    fn disjoint_lists_give_nothing() {
        let result = intersect_by_id(vec![vec![meal("1")], vec![meal("2")]]);
        assert!(result.is_empty());
    }

    #[test]
    fn self_intersection_is_a_no_op() {
        let list = vec![meal("1"), meal("2")];
        let result = intersect_by_id(vec![list.clone(), list.clone()]);
        assert_eq!(result, list);
    }

    #[test]
    fn membership_ignores_operand_order() {
        let chicken = vec![meal("1"), meal("2"), meal("3")];
        let rice = vec![meal("3"), meal("5"), meal("1")];

        let forward = intersect_by_id(vec![chicken.clone(), rice.clone()]);
        let backward = intersect_by_id(vec![rice, chicken]);

        assert_eq!(ids(&forward), vec!["1", "3"]);
        assert_eq!(ids(&backward), vec!["3", "1"]);

        let mut a = ids(&forward);
        let mut b = ids(&backward);
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }

    #[test]
    fn detects_empty_operand() {
        assert!(has_empty_operand(&[vec![meal("1")], vec![]]));
        assert!(!has_empty_operand(&[vec![meal("1")], vec![meal("1")]]));
    }
}
