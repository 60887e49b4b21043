use daily_limit::{Record, RecordError, SpendingTracker};
use rust_decimal_macros::dec;

fn main() -> Result<(), RecordError> {
    env_logger::init();

    let mut cash = SpendingTracker::new(dec!(1000));
    cash.add_record(Record::new(dec!(145), "кофе"));
    cash.add_record(Record::new(dec!(300), "Серёге за обед"));
    cash.add_record(Record::with_date(dec!(3000), "бар в Танин др", "08.11.2019")?);

    println!("{}", cash.remaining_in_currency("rub"));
    Ok(())
}
