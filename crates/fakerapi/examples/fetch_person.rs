//! Fetch one fake person and print it.

use fakerapi::{FakerClient, PersonRequest};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), fakerapi::Error> {
    let env_filter = EnvFilter::new("debug,hyper_util=warn,reqwest=warn,rustls=warn");
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let client = FakerClient::new()?;

    let person = client.persons(&PersonRequest::default()).await?;
    if let Some(person) = person.one() {
        println!(
            "{} {} <{}>",
            person.firstname().unwrap_or_default(),
            person.lastname().unwrap_or_default(),
            person.email().unwrap_or_default()
        );
        if let Some(address) = person.address() {
            println!(
                "{}, {}",
                address.street().unwrap_or_default(),
                address.city().unwrap_or_default()
            );
        }
    }

    Ok(())
}
