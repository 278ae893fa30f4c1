use std::io;

use medianasms::{
    AccessKey, ApiError, MedianaSmsClient, MedianaSmsError, Originator, PatternCode,
    RawPhoneNumber, SendPattern,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("MEDIANASMS_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_ACCESS_KEY environment variable is required",
        )
    })?;
    let pattern_code = std::env::var("MEDIANASMS_PATTERN_CODE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_PATTERN_CODE environment variable is required",
        )
    })?;
    let originator = std::env::var("MEDIANASMS_ORIGINATOR").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_ORIGINATOR environment variable is required",
        )
    })?;
    let recipient = std::env::var("MEDIANASMS_RECIPIENT").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_RECIPIENT environment variable is required",
        )
    })?;
    let name = std::env::var("MEDIANASMS_NAME").unwrap_or_else(|_| "Mediana".to_owned());

    let request = SendPattern::new(
        PatternCode::new(pattern_code)?,
        Originator::new(originator)?,
        RawPhoneNumber::new(recipient)?,
    )
    .value("name", name);

    let client = MedianaSmsClient::new(AccessKey::new(access_key)?)?;
    match client.send_pattern(request).await {
        Ok(bulk_id) => println!("bulk_id: {bulk_id}"),
        Err(MedianaSmsError::Api(ApiError::FieldErrors { errors, .. })) => {
            for (field, failures) in errors {
                for failure in failures {
                    println!("{field}: {} ({})", failure.message, failure.code);
                }
            }
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}
