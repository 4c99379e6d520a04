#![allow(dead_code)]

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde_json::{json, Value};

use snapblend::types::media::EncodedImage;
use snapblend::Client;

/// Payload returned by the default success mock.
pub const IMAGE_BYTES: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 7, 7];

pub const GENERATE_PATH: &str = "/v1beta/models/gemini-2.5-flash-image:generateContent";

pub fn build_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .retry_delay(0)
        .build()
        .unwrap()
}

pub fn person_image() -> EncodedImage {
    EncodedImage::new("image/jpeg", vec![1; 16], 800, 600)
}

pub fn product_image() -> EncodedImage {
    EncodedImage::new("image/jpeg", vec![2; 16], 400, 400)
}

/// A success body carrying a leading text part and one inline image part.
pub fn inline_image_response(bytes: &[u8]) -> Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [
                {"text": "here is your photo"},
                {"inlineData": {"mimeType": "image/png", "data": STANDARD.encode(bytes)}}
            ]}}
        ]
    })
}

pub fn text_only_response(text: &str) -> Value {
    json!({
        "candidates": [
            {"content": {"role": "model", "parts": [{"text": text}]}}
        ]
    })
}
