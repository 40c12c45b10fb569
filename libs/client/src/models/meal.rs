use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealDetail {
    pub name: String,
    #[serde(default)]
    pub allergies: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MealTime {
    #[serde(default)]
    pub details: Vec<MealDetail>,
    #[serde(default)]
    pub calorie: f64,
}

/// One day of meals; `exists` is false on days without service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    pub exists: bool,
    pub date: String,
    #[serde(default)]
    pub breakfast: Option<MealTime>,
    #[serde(default)]
    pub lunch: Option<MealTime>,
    #[serde(default)]
    pub dinner: Option<MealTime>,
}
