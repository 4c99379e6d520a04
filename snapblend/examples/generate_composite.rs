use std::path::PathBuf;

use snapblend::{prepare_image_from_path, Client};

#[tokio::main]
async fn main() -> snapblend::Result<()> {
    let mut args = std::env::args().skip(1);
    let person_path = PathBuf::from(args.next().unwrap_or_else(|| "person.jpg".into()));
    let product_path = PathBuf::from(args.next().unwrap_or_else(|| "product.jpg".into()));
    let scene = args.next().unwrap_or_else(|| "Café / Coffee shop".into());

    let person = prepare_image_from_path(&person_path)
        .await?
        .expect("person file is not an image");
    let product = prepare_image_from_path(&product_path)
        .await?
        .expect("product file is not an image");

    let client = Client::from_env()?;
    match client
        .generations()
        .generate(&person.image, &product.image, &scene)
        .await
    {
        Ok(bytes) => {
            std::fs::write("composite.png", bytes)?;
            println!("saved composite.png");
        }
        Err(err) => eprintln!("{}", err.user_message()),
    }

    Ok(())
}
