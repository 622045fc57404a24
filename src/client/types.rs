//! Type definitions for the TheMealDB API.
//!
//! TheMealDB answers every endpoint with the same envelope, `{ "meals": [...] }`,
//! where `meals` is `null` when nothing matched. The item shape depends on the
//! endpoint:
//!
//! - [`MealSummary`] - `filter.php` results (id, name, thumbnail)
//! - [`MealDetail`] - `random.php` and `lookup.php` results, with instructions
//!   and up to twenty numbered ingredient/measure columns
//! - [`MealsEnvelope`] - the shared wrapper
//!
//! ## API Compatibility
//!
//! The detail payload flattens its ingredient list into `strIngredient1..20`
//! and `strMeasure1..20`. [`MealDetail`] has a custom deserializer that folds
//! those columns into an ordered [`IngredientLine`] list and drops blank slots.

use serde::{Deserialize, Serialize};

/// Number of ingredient/measure column pairs TheMealDB exposes per meal.
pub const MAX_INGREDIENT_SLOTS: usize = 20;

/// Standard response wrapper shared by all catalog endpoints.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct MealsEnvelope<T> {
    /// `null` or absent when nothing matched
    #[serde(default)]
    pub meals: Option<Vec<T>>,
}

impl<T> MealsEnvelope<T> {
    /// Treats a missing or `null` list as empty.
    pub fn into_meals(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

/// Minimal recipe record used for grid display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSummary {
    /// Opaque catalog identifier, unique within a result set
    #[serde(rename = "idMeal")]
    pub id: String,
    /// Display name
    #[serde(rename = "strMeal")]
    pub name: String,
    /// Thumbnail image URL
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail: Option<String>,
}

/// One rendered line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub ingredient: String,
    /// Passed through untouched; may be blank
    pub measure: Option<String>,
}

impl std::fmt::Display for IngredientLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            self.ingredient,
            self.measure.as_deref().unwrap_or_default()
        )
    }
}

/// Full recipe record returned by the random and lookup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealDetail {
    /// Opaque catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Image URL (the catalog reuses the thumbnail column)
    pub image: Option<String>,
    /// Free-text preparation instructions
    pub instructions: Option<String>,
    /// Ingredients in catalog slot order, blank slots removed
    pub ingredients: Vec<IngredientLine>,
    /// External video link
    pub video: Option<String>,
}

impl MealDetail {
    /// Grid-sized view of this meal.
    pub fn summary(&self) -> MealSummary {
        MealSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            thumbnail: self.image.clone(),
        }
    }

    /// Video link, if the catalog gave a non-blank one.
    pub fn video_link(&self) -> Option<&str> {
        self.video.as_deref().filter(|v| !v.trim().is_empty())
    }
}

/// Pairs numbered ingredient and measure slots, keeping a slot only when its
/// ingredient is present and non-blank.
pub fn pair_ingredients(
    ingredients: &[Option<String>; MAX_INGREDIENT_SLOTS],
    measures: &[Option<String>; MAX_INGREDIENT_SLOTS],
) -> Vec<IngredientLine> {
    ingredients
        .iter()
        .zip(measures.iter())
        .filter_map(|(ingredient, measure)| {
            let ingredient = ingredient.as_ref()?;
            if ingredient.trim().is_empty() {
                return None;
            }
            Some(IngredientLine {
                ingredient: ingredient.clone(),
                measure: measure.clone(),
            })
        })
        .collect()
}

/// Parses the slot number out of `strIngredientN` / `strMeasureN` keys.
fn slot_index(key: &str, prefix: &str) -> Option<usize> {
    let n: usize = key.strip_prefix(prefix)?.parse().ok()?;
    (1..=MAX_INGREDIENT_SLOTS).contains(&n).then(|| n - 1)
}

/// Custom deserializer for MealDetail.
///
/// Folds the numbered `strIngredientN`/`strMeasureN` columns into
/// [`IngredientLine`]s. `idMeal` and `strMeal` are required; every other column
/// may be absent or `null`. Unknown columns are skipped.
impl<'de> serde::Deserialize<'de> for MealDetail {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct MealDetailVisitor;

        impl<'de> Visitor<'de> for MealDetailVisitor {
            type Value = MealDetail;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a meal object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut name: Option<String> = None;
                let mut image = None;
                let mut instructions = None;
                let mut video = None;
                let mut ingredients: [Option<String>; MAX_INGREDIENT_SLOTS] = Default::default();
                let mut measures: [Option<String>; MAX_INGREDIENT_SLOTS] = Default::default();

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "idMeal" => id = Some(map.next_value()?),
                        "strMeal" => name = Some(map.next_value()?),
                        "strMealThumb" => image = map.next_value()?,
                        "strInstructions" => instructions = map.next_value()?,
                        "strYoutube" => video = map.next_value()?,
                        other => {
                            if let Some(i) = slot_index(other, "strIngredient") {
                                ingredients[i] = map.next_value()?;
                            } else if let Some(i) = slot_index(other, "strMeasure") {
                                measures[i] = map.next_value()?;
                            } else {
                                map.next_value::<de::IgnoredAny>()?;
                            }
                        }
                    }
                }

                let id = id.ok_or_else(|| de::Error::missing_field("idMeal"))?;
                let name = name.ok_or_else(|| de::Error::missing_field("strMeal"))?;

                Ok(MealDetail {
                    id,
                    name,
                    image,
                    instructions,
                    ingredients: pair_ingredients(&ingredients, &measures),
                    video,
                })
            }
        }

        deserializer.deserialize_map(MealDetailVisitor)
    }
}
