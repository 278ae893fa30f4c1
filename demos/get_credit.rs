use std::io;

use medianasms::{AccessKey, MedianaSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("MEDIANASMS_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_ACCESS_KEY environment variable is required",
        )
    })?;

    let client = MedianaSmsClient::new(AccessKey::new(access_key)?)?;
    let credit = client.get_credit().await?;
    println!("credit: {credit}");

    Ok(())
}
