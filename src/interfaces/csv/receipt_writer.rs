use crate::domain::card::CardNumber;
use crate::domain::transaction::TransactionId;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Approved,
    Declined,
}

/// Outcome of one processed payment request, as written to the report.
///
/// The card is stored masked; full numbers never reach the output.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PaymentRecord {
    pub card: String,
    pub status: PaymentStatus,
    pub transaction: Option<String>,
}

impl PaymentRecord {
    pub fn approved(card: &CardNumber, transaction: &TransactionId) -> Self {
        Self {
            card: card.masked(),
            status: PaymentStatus::Approved,
            transaction: Some(transaction.as_str().to_string()),
        }
    }

    pub fn declined(card: &CardNumber) -> Self {
        Self {
            card: card.masked(),
            status: PaymentStatus::Declined,
            transaction: None,
        }
    }
}

/// Writes payment outcome records as CSV.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    /// Creates a new `ReceiptWriter` over any `Write` sink (e.g., Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes the records with a `card,status,transaction` header.
    pub fn write_records(&mut self, records: &[PaymentRecord]) -> Result<()> {
        for record in records {
            self.writer.serialize(record)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_rows() {
        let card = CardNumber::new("4242424242421111").unwrap();
        let transaction = TransactionId::generate("STRIPE");
        let records = vec![
            PaymentRecord::approved(&card, &transaction),
            PaymentRecord::declined(&card),
        ];

        let mut buffer = Vec::new();
        let mut writer = ReceiptWriter::new(&mut buffer);
        writer.write_records(&records).unwrap();
        drop(writer);

        let output = String::from_utf8(buffer).unwrap();
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("card,status,transaction"));

        let approved = lines.next().unwrap();
        assert!(approved.starts_with("****1111,approved,STRIPE-"));

        let declined = lines.next().unwrap();
        assert_eq!(declined, "****1111,declined,");
    }

    #[test]
    fn test_empty_batch_writes_nothing() {
        let mut buffer = Vec::new();
        let mut writer = ReceiptWriter::new(&mut buffer);
        writer.write_records(&[]).unwrap();
        drop(writer);
        assert!(buffer.is_empty());
    }
}
