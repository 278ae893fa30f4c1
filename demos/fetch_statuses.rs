use std::io;

use medianasms::{AccessKey, BulkId, ListParams, MedianaSmsClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let access_key = std::env::var("MEDIANASMS_ACCESS_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "MEDIANASMS_ACCESS_KEY environment variable is required",
        )
    })?;
    let bulk_id = std::env::var("MEDIANASMS_BULK_ID")
        .map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                "MEDIANASMS_BULK_ID environment variable is required",
            )
        })?
        .trim()
        .parse::<i64>()?;

    let client = MedianaSmsClient::new(AccessKey::new(access_key)?)?;
    let message = client.get_message(BulkId::new(bulk_id)).await?;
    println!(
        "bulk_id: {}, status: {:?}, confirm_state: {:?}, recipients: {}",
        message.bulk_id, message.status, message.confirm_state, message.recipients_count
    );

    let mut params = ListParams::default();
    loop {
        let page = client.fetch_statuses(message.bulk_id, params).await?;
        for recipient in &page.items {
            println!("{}: {}", recipient.recipient, recipient.status);
        }
        match page.pagination {
            Some(pagination) if pagination.next.is_some() => params.page += 1,
            _ => break,
        }
    }

    Ok(())
}
