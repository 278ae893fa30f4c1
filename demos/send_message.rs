use std::io;

use medianasms::{
    AccessKey, MedianaSmsClient, MessageText, Originator, PhoneNumber, RawPhoneNumber, SendMessage,
};
use phonenumber::country;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("MEDIANASMS_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_ACCESS_KEY environment variable is required",
        )
    })?;
    let originator = std::env::var("MEDIANASMS_ORIGINATOR").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_ORIGINATOR environment variable is required",
        )
    })?;
    let recipients_raw = std::env::var("MEDIANASMS_RECIPIENTS").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_RECIPIENTS environment variable is required (comma-separated numbers)",
        )
    })?;
    let message = std::env::var("MEDIANASMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the medianasms demo.".to_owned());

    // Local numbers such as `0912...` are normalized to E.164 before sending.
    let recipients = recipients_raw
        .split(',')
        .map(|it| PhoneNumber::parse(Some(country::Id::IR), it).map(RawPhoneNumber::from))
        .collect::<Result<Vec<_>, _>>()?;
    let request = SendMessage::new(
        Originator::new(originator)?,
        recipients,
        MessageText::new(message)?,
    )?;

    let client = MedianaSmsClient::new(AccessKey::new(access_key)?)?;
    let bulk_id = client.send_message(request).await?;
    println!("bulk_id: {bulk_id}");

    Ok(())
}
