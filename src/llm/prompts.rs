//! Fixed prompt material for recipe generation.
//!
//! The system instruction and the response schema are constants of the
//! product, not configuration: every request sends the same persona and the
//! same structural contract, and only the dish name varies.

use serde_json::{Value, json};

/// Model identifier sent to the API.
pub const MODEL_ID: &str = "gemini-2.5-flash";

/// Sampling temperature for every request.
pub const TEMPERATURE: f32 = 0.7;

/// System instruction establishing the home-cook persona and format rules.
pub const SYSTEM_INSTRUCTION: &str = r"You are a passionate and knowledgeable Indian home cook, guiding a beginner in their kitchen. Your tone should be warm, encouraging, and detailed, like sharing a secret family recipe.

Your most important job is to make the recipe extremely simple and easy to follow. Do not overcomplicate it. Write for someone who has never cooked before. Break down each step into a single, small, manageable action. For example, instead of 'saute onions until translucent, then add ginger-garlic paste and spices', break it into separate steps: '1. Add the chopped onions to the hot oil.', '2. Cook them, stirring often, until they look soft and see-through.', '3. Now, stir in the ginger-garlic paste.', '4. Add all the spice powders and stir for one minute.' Avoid technical culinary terms. The goal is clarity and simplicity above all else.

Where relevant, provide a short, useful 'tip' for a specific step. This should be a small piece of advice that enhances the result, like how to test oil temperature or why a certain ingredient is added at a specific time. Give it a catchy title. Do not add tips to every step, only where they add real value.

Your primary focus is on authentic Indian recipes and cooking styles.
Assume the user has a standard Indian kitchen: a gas stove, pressure cooker, kadai (wok), tawa (griddle), belan (rolling pin), and basic utensils. They likely do not have an oven, stand mixer, or food processor.
When a recipe traditionally needs special equipment (like an oven for naan or a tandoor), you MUST state this clearly upfront in the equipment section. Then, you MUST provide a practical, home-friendly alternative using common equipment (e.g., 'cook the naan on a tawa').
Use ingredient names commonly understood in Indian kitchens (e.g., 'atta', 'jeera', 'haldi'). For clarity, ALWAYS provide the English equivalent in the 'englishName' field.
Use measurements common in Indian cooking like cups, teaspoons, tablespoons, katori, or grams.
Provide practical, India-specific cooking tips, but explain them simply. For example, when talking about tadka, say 'Heat the oil and add the mustard seeds. Wait for them to pop and crackle before moving on.'
If a dish has significant regional variations (e.g., Sambar), mention them in the notes.
You must provide an estimated total preparation and cooking time.
You must return the recipe in the requested JSON format.";

/// Builds the user-turn prompt for a dish.
#[must_use]
pub fn build_user_prompt(dish_name: &str) -> String {
    format!("Generate a step-by-step recipe for {dish_name}.")
}

/// The structured-output schema the model is constrained to satisfy.
///
/// Mirrors the shape of [`crate::recipe::Recipe`]; the field descriptions
/// are part of the prompt surface and steer the model's content.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "dishName": {
                "type": "STRING",
                "description": "The name of the dish."
            },
            "description": {
                "type": "STRING",
                "description": "A short, incredibly tempting one-liner (max 15 words) that makes the user immediately hungry. Use evocative, sensory words focusing on texture, aroma, and rich flavors (e.g., 'velvety,' 'fragrant,' 'zesty,' 'smoky'). This is the hook that sells the recipe."
            },
            "prepTime": {
                "type": "STRING",
                "description": "Estimated total preparation and cooking time, e.g., 'Approx. 45 minutes'."
            },
            "equipment": {
                "type": "ARRAY",
                "description": "List of kitchen equipment needed. Assume a standard Indian kitchen. Identify specialized tools and provide alternatives.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "item": {
                            "type": "STRING",
                            "description": "Name of the equipment."
                        },
                        "isSpecialized": {
                            "type": "BOOLEAN",
                            "description": "True if this is a specialized tool not found in a typical Indian kitchen (e.g., oven, stand mixer)."
                        },
                        "alternative": {
                            "type": "STRING",
                            "description": "A simple, common alternative if the equipment is specialized (e.g., 'use a tawa instead of an oven'). Null if not specialized.",
                            "nullable": true
                        }
                    },
                    "required": ["item", "isSpecialized", "alternative"]
                }
            },
            "ingredients": {
                "type": "ARRAY",
                "description": "List of ingredients with exact amounts. Use common Indian names and provide English equivalents.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "amount": {
                            "type": "STRING",
                            "description": "The quantity, e.g., '1 cup', '2 tsp', '1 katori'."
                        },
                        "commonName": {
                            "type": "STRING",
                            "description": "The common Indian name for the ingredient, e.g., 'atta', 'jeera'."
                        },
                        "englishName": {
                            "type": "STRING",
                            "description": "The English name for the ingredient, e.g., 'whole wheat flour', 'cumin seeds'."
                        }
                    },
                    "required": ["amount", "commonName", "englishName"]
                }
            },
            "method": {
                "type": "ARRAY",
                "description": "The step-by-step instructions for preparing the dish, including India-specific tips.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "step": {
                            "type": "INTEGER",
                            "description": "The step number."
                        },
                        "instruction": {
                            "type": "STRING",
                            "description": "Detailed instruction for this step, with tips like checking tadka or dough consistency."
                        },
                        "tip": {
                            "type": "OBJECT",
                            "description": "An optional, short, practical cooking tip directly related to this specific step. Only include if a truly useful, non-obvious tip applies.",
                            "properties": {
                                "title": {
                                    "type": "STRING",
                                    "description": "A short, catchy title for the tip, e.g., 'Pro Tip' or 'Secret to Fluffiness'."
                                },
                                "content": {
                                    "type": "STRING",
                                    "description": "The content of the tip, e.g., 'Crushing kasuri methi in your palm before adding releases its aroma and flavor.'"
                                }
                            }
                        }
                    },
                    "required": ["step", "instruction"]
                }
            },
            "notes": {
                "type": "ARRAY",
                "description": "Additional notes, tips, regional variations, or substitution suggestions.",
                "items": { "type": "STRING" }
            }
        },
        "required": [
            "dishName",
            "description",
            "prepTime",
            "equipment",
            "ingredients",
            "method",
            "notes"
        ]
    })
}
