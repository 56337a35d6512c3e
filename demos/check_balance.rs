use std::io;

use easysendsms::{Auth, EasySendSmsClient};

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

    let client = EasySendSmsClient::new(Auth::new(username, password)?);
    let balance = client.check_balance().await?;
    println!("balance: {balance}");

    Ok(())
}
