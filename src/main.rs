use clap::{ArgGroup, Parser};
use miette::{IntoDiagnostic, Result};
use payfront::application::service::PaymentService;
use payfront::domain::card::CardNumber;
use payfront::domain::money::Amount;
use payfront::error::PaymentError;
use payfront::infrastructure::registry::FamilyRegistry;
use payfront::interfaces::csv::payment_reader::PaymentReader;
use payfront::interfaces::csv::receipt_writer::{PaymentRecord, ReceiptWriter};
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(group = ArgGroup::new("mode").required(true).args(["card", "input"]))]
struct Cli {
    /// Gateway family to route payments through (pagseguro, mercadopago, stripe)
    family: String,

    /// Card number for a single payment
    #[arg(long, requires = "amount", conflicts_with = "input")]
    card: Option<String>,

    /// Amount for a single payment
    #[arg(long, requires = "card")]
    amount: Option<Decimal>,

    /// Batch input CSV file with `card, amount` rows
    #[arg(long)]
    input: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Selection failures are fatal before any service exists
    let registry = FamilyRegistry::with_default_gateways();
    let factory = registry.resolve(&cli.family).into_diagnostic()?;
    let service = PaymentService::new(factory.as_ref());

    let mut records = Vec::new();

    if let Some(input) = cli.input {
        let file = File::open(input).into_diagnostic()?;
        let reader = PaymentReader::new(file);
        for request in reader.requests() {
            match request {
                Ok(request) => match pay(&service, &request.card, request.amount).await {
                    Ok(record) => records.push(record),
                    Err(e) => eprintln!("Error processing payment: {e}"),
                },
                Err(e) => eprintln!("Error reading payment: {e}"),
            }
        }
    } else if let (Some(card), Some(amount)) = (cli.card, cli.amount) {
        let record = pay(&service, &card, amount).await.into_diagnostic()?;
        records.push(record);
    }

    let stdout = io::stdout();
    let mut writer = ReceiptWriter::new(stdout.lock());
    writer.write_records(&records).into_diagnostic()?;

    Ok(())
}

/// Runs one payment and folds the outcome into a report record.
///
/// A validator rejection is an ordinary declined record; everything else
/// propagates to the caller.
async fn pay(
    service: &PaymentService,
    card: &str,
    amount: Decimal,
) -> payfront::error::Result<PaymentRecord> {
    let card = CardNumber::new(card)?;
    let amount = Amount::new(amount)?;

    match service.process_payment(amount, &card).await {
        Ok(transaction) => Ok(PaymentRecord::approved(&card, &transaction)),
        Err(PaymentError::InvalidCard(reason)) => {
            eprintln!("Payment declined: {reason}");
            Ok(PaymentRecord::declined(&card))
        }
        Err(e) => Err(e),
    }
}
