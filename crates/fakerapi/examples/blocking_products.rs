//! Fetch a handful of fake products without an async runtime.

use fakerapi::blocking::FakerClient;
use fakerapi::ProductRequest;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), fakerapi::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = FakerClient::new();

    let request = ProductRequest {
        quantity: 3,
        ..Default::default()
    };
    for product in client.products(&request)?.into_vec() {
        println!(
            "{}: {}",
            product.name().unwrap_or("?"),
            product.price().unwrap_or("?")
        );
    }

    Ok(())
}
