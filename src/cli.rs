//! Command-line surface: flag parsing, recipient loading, human-readable output.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use easysendsms::{
    Auth, EasySendSmsClient, EasySendSmsError, MessageText, RawPhoneNumber, SendOptions, SendSms,
    SenderId,
};

/// Longest message prefix echoed back in the pre-send summary.
const PREVIEW_CHARS: usize = 50;

#[derive(Parser, Debug)]
#[command(
    name = "easysendsms",
    version,
    about = "Send bulk SMS with an alphanumeric sender id",
    after_help = "Examples:\n  \
        easysendsms --sender \"YourBrand\" --to \"+447123456789\" --message \"Hello!\"\n  \
        easysendsms --sender \"YourBrand\" --file numbers.txt --message \"Promo alert!\"\n  \
        easysendsms --balance"
)]
pub struct Args {
    /// Alphanumeric sender id (1-11 chars, e.g. "YourBrand")
    #[arg(short = 's', long)]
    pub sender: Option<String>,

    /// Comma-separated phone numbers in E.164 format
    #[arg(short = 't', long)]
    pub to: Option<String>,

    /// File containing phone numbers (one per line; `#` starts a comment)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,

    /// SMS message content
    #[arg(short = 'm', long)]
    pub message: Option<String>,

    /// Send as flash SMS
    #[arg(long)]
    pub flash: bool,

    /// Check the account balance instead of sending
    #[arg(short = 'b', long)]
    pub balance: bool,

    /// EasySendSMS username
    #[arg(long, env = "EASYSENDSMS_USERNAME")]
    pub username: Option<String>,

    /// EasySendSMS password
    #[arg(long, env = "EASYSENDSMS_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("failed to read recipients from {}: {source}", path.display())]
    RecipientsFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}")]
    Balance(#[source] EasySendSmsError),

    #[error("{0}")]
    Send(#[source] EasySendSmsError),
}

/// Install the stderr log subscriber; filtering comes from `RUST_LOG`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Run one invocation and map the outcome onto the process exit code.
pub async fn run(args: Args) -> ExitCode {
    match execute(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::FAILURE
        }
    }
}

async fn execute(args: Args) -> Result<(), CliError> {
    let auth = resolve_auth(&args)?;
    let client = EasySendSmsClient::new(auth);

    if args.balance {
        let balance = client.check_balance().await.map_err(CliError::Balance)?;
        println!("Account Balance: {balance}");
        return Ok(());
    }

    let sender = args
        .sender
        .as_deref()
        .ok_or_else(|| CliError::Usage("--sender is required for sending SMS".to_owned()))?;
    let message = args
        .message
        .as_deref()
        .ok_or_else(|| CliError::Usage("--message is required".to_owned()))?;
    if args.to.is_none() && args.file.is_none() {
        return Err(CliError::Usage(
            "either --to or --file is required".to_owned(),
        ));
    }

    let recipients = collect_recipients(args.to.as_deref(), args.file.as_deref())?;
    if recipients.is_empty() {
        return Err(CliError::Usage("no valid recipients found".to_owned()));
    }

    let sender = SenderId::new(sender).map_err(|err| CliError::Send(err.into()))?;
    let text = MessageText::new(message).map_err(|err| CliError::Send(err.into()))?;
    let request = SendSms::new(sender, recipients, text, SendOptions { flash: args.flash })
        .map_err(|err| CliError::Send(err.into()))?;

    println!(
        "Sending SMS to {} recipient(s)...",
        request.recipients().len()
    );
    println!("Sender ID: {}", request.sender().as_str());
    println!("Message: {}", preview(request.text().as_str()));
    println!();

    tracing::debug!(
        recipients = request.recipients().len(),
        flash = request.options().flash,
        "submitting bulksms request"
    );

    let receipt = client.send_sms(request).await.map_err(CliError::Send)?;

    println!("✓ SMS sent successfully!");
    println!("  Message ID: {}", receipt.message_id);
    println!("  Recipients: {}", receipt.recipients);
    println!("  Sender ID: {}", receipt.sender.as_str());

    Ok(())
}

fn report(err: &CliError) {
    match err {
        CliError::Send(source) => {
            eprintln!("✗ Failed to send SMS");
            eprintln!("  Error: {}", failure_text(source));
            eprintln!("  Code: {}", source.category());
        }
        CliError::Balance(source) => {
            eprintln!("Error: {}", failure_text(source));
        }
        other => eprintln!("Error: {other}"),
    }
}

/// The provider's raw reply for API rejections, the error display otherwise.
fn failure_text(err: &EasySendSmsError) -> String {
    match err {
        EasySendSmsError::Api { text, .. } => text.clone(),
        other => other.to_string(),
    }
}

fn resolve_auth(args: &Args) -> Result<Auth, CliError> {
    let (Some(username), Some(password)) = (args.username.as_deref(), args.password.as_deref())
    else {
        return Err(CliError::Usage(
            "EasySendSMS credentials required. Set the EASYSENDSMS_USERNAME and \
             EASYSENDSMS_PASSWORD environment variables, or use --username and --password."
                .to_owned(),
        ));
    };
    Auth::new(username, password).map_err(|err| CliError::Usage(err.to_string()))
}

/// Merge recipients from `--to` and `--file`.
///
/// Duplicates survive here; the request constructor collapses them so the
/// count printed before sending matches what actually goes out.
fn collect_recipients(
    to: Option<&str>,
    file: Option<&Path>,
) -> Result<Vec<RawPhoneNumber>, CliError> {
    let mut numbers = Vec::<String>::new();

    if let Some(to) = to {
        numbers.extend(
            to.split(',')
                .map(str::trim)
                .filter(|number| !number.is_empty())
                .map(str::to_owned),
        );
    }

    if let Some(path) = file {
        let contents = fs::read_to_string(path).map_err(|source| CliError::RecipientsFile {
            path: path.to_owned(),
            source,
        })?;
        let from_file = parse_recipient_lines(&contents);
        tracing::debug!(path = %path.display(), count = from_file.len(), "loaded recipients file");
        numbers.extend(from_file);
    }

    numbers
        .into_iter()
        .map(|number| RawPhoneNumber::new(number).map_err(|err| CliError::Send(err.into())))
        .collect()
}

/// Parse a recipients file: one number per line, blank lines and `#` comments
/// skipped, `+` prepended where missing.
fn parse_recipient_lines(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| {
            if line.starts_with('+') {
                line.to_owned()
            } else {
                format!("+{line}")
            }
        })
        .collect()
}

fn preview(message: &str) -> String {
    let truncated: String = message.chars().take(PREVIEW_CHARS).collect();
    if message.chars().count() > PREVIEW_CHARS {
        format!("{truncated}...")
    } else {
        truncated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipient_lines_skip_comments_and_prepend_plus() {
        let contents = "447000000001\n# comment\n+447000000002\n\n";
        assert_eq!(
            parse_recipient_lines(contents),
            vec!["+447000000001".to_owned(), "+447000000002".to_owned()]
        );
    }

    #[test]
    fn to_flag_splits_on_commas_and_skips_empties() {
        let numbers = collect_recipients(Some(" +447000000001 , +447000000003 ,"), None).unwrap();
        let raws: Vec<&str> = numbers.iter().map(RawPhoneNumber::raw).collect();
        assert_eq!(raws, vec!["+447000000001", "+447000000003"]);
    }

    #[test]
    fn duplicate_recipients_collapse_in_the_request() {
        // One number arrives via --to, again via a file line without `+`.
        let mut numbers = collect_recipients(Some("+447000000001"), None).unwrap();
        for line in parse_recipient_lines("447000000001\n447000000002") {
            numbers.push(RawPhoneNumber::new(line).unwrap());
        }

        let request = SendSms::new(
            SenderId::new("YourBrand").unwrap(),
            numbers,
            MessageText::new("hi").unwrap(),
            SendOptions::default(),
        )
        .unwrap();

        let raws: Vec<&str> = request.recipients().iter().map(RawPhoneNumber::raw).collect();
        assert_eq!(raws, vec!["+447000000001", "+447000000002"]);
    }

    #[test]
    fn preview_truncates_long_messages() {
        let short = "Hello!";
        assert_eq!(preview(short), "Hello!");

        let long = "x".repeat(60);
        let shown = preview(&long);
        assert_eq!(shown, format!("{}...", "x".repeat(50)));
    }

    #[test]
    fn args_parse_short_flags() {
        let args = Args::try_parse_from([
            "easysendsms",
            "-s",
            "YourBrand",
            "-t",
            "+447123456789",
            "-m",
            "Hello!",
            "--flash",
        ])
        .unwrap();

        assert_eq!(args.sender.as_deref(), Some("YourBrand"));
        assert_eq!(args.to.as_deref(), Some("+447123456789"));
        assert_eq!(args.message.as_deref(), Some("Hello!"));
        assert!(args.flash);
        assert!(!args.balance);
    }

    #[test]
    fn args_parse_balance_mode() {
        let args = Args::try_parse_from(["easysendsms", "-b"]).unwrap();
        assert!(args.balance);
        assert!(args.sender.is_none());
    }
}
