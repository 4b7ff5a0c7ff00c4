/// Invoice number generation: `INV-<unix-ms>-<random 1000..=9999999999>`
///
/// There is no retry on collision; the unique constraint on
/// `invoices.invoice_number` turns a duplicate into a Conflict.
use chrono::Utc;
use rand::Rng;

pub const INVOICE_PREFIX: &str = "INV";
pub const SUFFIX_MIN: u64 = 1_000;
pub const SUFFIX_MAX: u64 = 9_999_999_999;

#[cfg_attr(test, mockall::automock)]
pub trait InvoiceNumberGenerator: Send + Sync {
    fn next_number(&self) -> String;
}

pub fn format_invoice_number(epoch_millis: i64, suffix: u64) -> String {
    format!("{}-{}-{}", INVOICE_PREFIX, epoch_millis, suffix)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomInvoiceNumberGenerator;

impl InvoiceNumberGenerator for RandomInvoiceNumberGenerator {
    fn next_number(&self) -> String {
        let suffix = rand::thread_rng().gen_range(SUFFIX_MIN..=SUFFIX_MAX);
        format_invoice_number(Utc::now().timestamp_millis(), suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(
            format_invoice_number(1_735_722_000_000, 4821),
            "INV-1735722000000-4821"
        );
    }

    #[test]
    fn test_random_numbers_follow_format() {
        let generator = RandomInvoiceNumberGenerator;
        for _ in 0..100 {
            let number = generator.next_number();
            let parts: Vec<&str> = number.split('-').collect();
            assert_eq!(parts.len(), 3, "unexpected shape: {}", number);
            assert_eq!(parts[0], "INV");
            assert!(parts[1].parse::<i64>().unwrap() > 0);
            let suffix: u64 = parts[2].parse().unwrap();
            assert!((SUFFIX_MIN..=SUFFIX_MAX).contains(&suffix));
        }
    }
}
