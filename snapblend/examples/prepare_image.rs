use snapblend::prepare_image_from_path;

#[tokio::main]
async fn main() -> snapblend::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "photo.jpg".into());

    match prepare_image_from_path(&path).await? {
        Some(prepared) => {
            println!(
                "{}x{} {} ({} bytes, preview {} chars)",
                prepared.image.width,
                prepared.image.height,
                prepared.image.mime_type,
                prepared.image.len(),
                prepared.preview.len()
            );
        }
        None => println!("{path} is not an image, skipped"),
    }

    Ok(())
}
