use crate::client::{ContentBlock, Message, MessageContent};
use crate::error::ChefError;
use crate::model::ImagePayload;

/// The example output record embedded in every generation prompt.
///
/// Its field names are the contract between the instruction we send the
/// model and the schema `RecipeSuggestion` deserializes; the two must not
/// drift apart.
///
/// The skeleton is loaded from `response_skeleton.json` at compile time
/// using the `include_str!` macro, making it easy to edit without dealing
/// with Rust string syntax.
pub const RESPONSE_SKELETON: &str = include_str!("response_skeleton.json");

/// Fixed instruction sent alongside a photo when scanning for ingredients.
pub const SCAN_INSTRUCTION: &str = r#"List all the food ingredients you can see in this image. Return ONLY a JSON array of ingredient names, nothing else. Format: ["ingredient1", "ingredient2", ...]. Be specific and list individual items."#;

/// Render the recipe-generation instruction text.
///
/// Lists the user's ingredients verbatim, states the pantry assumption,
/// asks for exactly `count` recipes, and pins the output format to a bare
/// JSON array matching [`RESPONSE_SKELETON`].
///
/// # Errors
/// Returns `EmptyIngredients` if `ingredients` is empty; a generation
/// request must never be sent with zero ingredients.
pub fn recipe_prompt(
    ingredients: &[String],
    pantry: &[String],
    count: u8,
) -> Result<String, ChefError> {
    if ingredients.is_empty() {
        return Err(ChefError::EmptyIngredients);
    }

    let ingredient_list = ingredients.join(", ");
    let pantry_list = pantry.join(", ");

    Ok(format!(
        r#"I have these ingredients: {ingredient_list}.

You can also assume I have these common pantry items available: {pantry_list}.

Suggest {count} diverse recipes ranging from simple everyday meals to creative/gourmet dishes. Mix it up with:
- Simple comfort food (sandwiches, pasta, basic dinners)
- Creative/interesting combinations
- International cuisine variations
- Quick meals and more elaborate dishes

For each recipe, include:
1. Recipes using ONLY my current ingredients
2. Creative variations that might need 1-2 additional ingredients (mark these clearly as "optional additions")
3. A food image search term (simple 2-3 word description for finding images)

CRITICAL: You MUST return ONLY valid JSON. No markdown, no backticks, no explanation text.

Return ONLY a JSON array with this exact format:
{skeleton}
Be diverse in your suggestions - include both practical everyday meals and more adventurous creative options. Return ONLY the JSON array, nothing else."#,
        skeleton = RESPONSE_SKELETON,
    ))
}

/// Build the user message for a recipe-generation request.
pub fn recipe_message(
    ingredients: &[String],
    pantry: &[String],
    count: u8,
) -> Result<Message, ChefError> {
    Ok(Message::user(MessageContent::Text(recipe_prompt(
        ingredients,
        pantry,
        count,
    )?)))
}

/// Build the multimodal user message for an ingredient-scan request.
///
/// The image block comes first, then the fixed instruction text.
pub fn scan_message(image: &ImagePayload) -> Message {
    Message::user(MessageContent::Blocks(vec![
        ContentBlock::image(&image.media_type, &image.data),
        ContentBlock::text(SCAN_INSTRUCTION),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_matches_parser_schema() {
        // Verify the skeleton is not empty
        assert!(!RESPONSE_SKELETON.is_empty());

        // Field names the parser requires
        assert!(RESPONSE_SKELETON.contains(r#""name""#));
        assert!(RESPONSE_SKELETON.contains(r#""description""#));
        assert!(RESPONSE_SKELETON.contains(r#""ingredients""#));
        assert!(RESPONSE_SKELETON.contains(r#""time""#));
        assert!(RESPONSE_SKELETON.contains(r#""difficulty""#));

        // Optional fields, camelCase as the parser expects them
        assert!(RESPONSE_SKELETON.contains(r#""creativityLevel""#));
        assert!(RESPONSE_SKELETON.contains(r#""optionalAdditions""#));
        assert!(RESPONSE_SKELETON.contains(r#""imageSearchTerm""#));
        assert!(RESPONSE_SKELETON.contains(r#""instructions""#));
    }

    #[test]
    fn test_skeleton_shows_closed_vocabularies() {
        assert!(RESPONSE_SKELETON.contains("easy/medium/hard"));
        assert!(RESPONSE_SKELETON.contains("simple/creative/gourmet"));
    }

    #[test]
    fn test_recipe_prompt_lists_ingredients_verbatim() {
        let ingredients = vec!["chicken breast".to_string(), "rice".to_string()];
        let pantry = vec!["salt".to_string(), "pepper".to_string()];

        let prompt = recipe_prompt(&ingredients, &pantry, 5).unwrap();
        assert!(prompt.contains("I have these ingredients: chicken breast, rice."));
        assert!(prompt.contains("pantry items available: salt, pepper."));
        assert!(prompt.contains("Suggest 5 diverse recipes"));
    }

    #[test]
    fn test_recipe_prompt_pins_output_contract() {
        let ingredients = vec!["egg".to_string()];
        let pantry = vec!["salt".to_string()];

        let prompt = recipe_prompt(&ingredients, &pantry, 3).unwrap();
        assert!(prompt.contains("CRITICAL: You MUST return ONLY valid JSON."));
        assert!(prompt.contains("Return ONLY a JSON array with this exact format:"));
        assert!(prompt.contains(RESPONSE_SKELETON));
        assert!(prompt.ends_with("Return ONLY the JSON array, nothing else."));
    }

    #[test]
    fn test_recipe_prompt_rejects_empty_ingredients() {
        let result = recipe_prompt(&[], &["salt".to_string()], 5);
        assert!(matches!(result, Err(ChefError::EmptyIngredients)));
    }

    #[test]
    fn test_scan_instruction_demands_bare_array() {
        assert!(SCAN_INSTRUCTION.contains("Return ONLY a JSON array"));
        assert!(SCAN_INSTRUCTION.contains(r#"["ingredient1", "ingredient2", ...]"#));
    }

    #[test]
    fn test_scan_message_orders_image_before_instruction() {
        let image = ImagePayload::new("image/jpeg", "aGVsbG8=");
        let message = scan_message(&image);

        assert_eq!(message.role, "user");
        match &message.content {
            MessageContent::Blocks(blocks) => {
                assert_eq!(blocks.len(), 2);
                assert!(matches!(blocks[0], ContentBlock::Image { .. }));
                match &blocks[1] {
                    ContentBlock::Text { text } => assert_eq!(text, SCAN_INSTRUCTION),
                    other => panic!("unexpected block: {other:?}"),
                }
            }
            MessageContent::Text(_) => panic!("expected multimodal content"),
        }
    }
}
