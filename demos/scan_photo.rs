//! Scan a photo for ingredients and fold them into the list
//!
//! Usage: cargo run --example scan_photo -- path/to/photo.jpg

use pantry_chef::{Chef, ChefConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "fridge.jpg".to_string());

    let mut chef = Chef::new(ChefConfig::load()?);
    chef.add_ingredient("egg");

    println!("Scanning {} for ingredients...", path);
    match chef.scan_ingredients_from_path(&path).await {
        Ok(items) => {
            println!("Ingredient list is now:");
            for item in items {
                println!("  - {}", item);
            }
        }
        Err(err) => eprintln!("{}", err.user_message()),
    }

    Ok(())
}
