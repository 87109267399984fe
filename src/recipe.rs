//! Recipe data model.
//!
//! These types mirror the JSON the model is constrained to emit (camelCase
//! on the wire). The recipe is deserialized once per search and never
//! modified afterwards; the UI only derives view state from it.

use serde::{Deserialize, Serialize};

/// A piece of kitchen equipment, with an alternative when specialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    /// Name of the equipment (e.g. "kadai", "pressure cooker").
    pub item: String,
    /// True when the tool is not found in a typical Indian home kitchen.
    pub is_specialized: bool,
    /// A home-friendly substitute for specialized tools.
    pub alternative: Option<String>,
}

/// One ingredient line with Indian and English names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// The quantity (e.g. "1 cup", "2 tsp", "1 katori").
    pub amount: String,
    /// The common Indian name (e.g. "atta", "jeera").
    pub common_name: String,
    /// The English equivalent (e.g. "whole wheat flour").
    pub english_name: String,
}

/// A short, practical tip attached to a specific method step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tip {
    /// Catchy title (e.g. "Secret to Fluffiness").
    pub title: String,
    /// The advice itself.
    pub content: String,
}

/// One step in the cooking method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodStep {
    /// 1-based step number as assigned by the model.
    pub step: u32,
    /// The instruction text for this step.
    pub instruction: String,
    /// Optional tip; most steps have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tip: Option<Tip>,
}

/// A complete generated recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// The name of the dish.
    pub dish_name: String,
    /// Short evocative one-liner.
    pub description: String,
    /// Free-text total preparation and cooking time.
    pub prep_time: String,
    /// Kitchen equipment needed.
    pub equipment: Vec<Equipment>,
    /// Ingredients with exact amounts.
    pub ingredients: Vec<Ingredient>,
    /// Step-by-step instructions. Non-empty for any recipe the app accepts;
    /// the parser rejects an empty method (see `llm::parse_recipe_json`).
    pub method: Vec<MethodStep>,
    /// Regional variations, substitutions, serving notes.
    pub notes: Vec<String>,
}
