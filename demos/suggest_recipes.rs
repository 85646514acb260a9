//! Generate recipe suggestions from a fixed ingredient list
//!
//! Expects the inference proxy to be reachable at the configured endpoint
//! (PANTRY_CHEF__ENDPOINT or config.toml; defaults to the local functions
//! host).

use pantry_chef::{Chef, ChefConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut chef = Chef::new(ChefConfig::load()?);
    chef.add_ingredient("chicken breast");
    chef.add_ingredient("rice");
    chef.add_ingredient("bell pepper");

    println!("Ingredients on hand:");
    for item in chef.ingredients() {
        println!("  - {}", item);
    }

    println!("\nAsking for suggestions...");
    match chef.generate_recipes().await {
        Ok(recipes) => {
            for recipe in recipes {
                println!("\n{} ({}, {})", recipe.name, recipe.time, recipe.difficulty);
                println!("  {}", recipe.description);
                println!("  Uses: {}", recipe.ingredients.join(", "));
                if let Some(additions) = &recipe.optional_additions {
                    if !additions.is_empty() {
                        println!("  Optional additions: {}", additions.join(", "));
                    }
                }
                println!("  Image: {}", recipe.image_url());
            }
        }
        Err(err) => eprintln!("{}", err.user_message()),
    }

    Ok(())
}
