use std::io;

use easysendsms::{
    Auth, EasySendSmsClient, MessageText, RawPhoneNumber, SendOptions, SendSms, SenderId,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let username = std::env::var("EASYSENDSMS_USERNAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EASYSENDSMS_USERNAME environment variable is required",
        )
    })?;
    let password = std::env::var("EASYSENDSMS_PASSWORD").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EASYSENDSMS_PASSWORD environment variable is required",
        )
    })?;
    let phone_raw = std::env::var("EASYSENDSMS_PHONE").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "EASYSENDSMS_PHONE environment variable is required",
        )
    })?;
    let message = std::env::var("EASYSENDSMS_MESSAGE")
        .unwrap_or_else(|_| "Hello from the easysendsms demo.".to_owned());

    let client = EasySendSmsClient::new(Auth::new(username, password)?);
    let sender = SenderId::new("YourBrand")?;
    let phone = RawPhoneNumber::new(phone_raw)?;
    let text = MessageText::new(message)?;
    let request = SendSms::new(sender, vec![phone], text, SendOptions::default())?;

    let receipt = client.send_sms(request).await?;
    println!(
        "message_id: {}, recipients: {}, sender: {}",
        receipt.message_id,
        receipt.recipients,
        receipt.sender.as_str()
    );

    Ok(())
}
