use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a batch CSV of `card, amount` rows. Every card is 16 digits and
/// starts with the given leading digit, so the whole batch targets one
/// family's brand range.
pub fn generate_batch_csv(path: &Path, rows: usize, leading: char) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["card", "amount"])?;

    let mut rng = rand::thread_rng();
    for _ in 0..rows {
        let mut card = String::from(leading);
        for _ in 0..15 {
            card.push(char::from(b'0' + rng.gen_range(0u8..10)));
        }
        wtr.write_record([card.as_str(), "10.00"])?;
    }

    wtr.flush()?;
    Ok(())
}
