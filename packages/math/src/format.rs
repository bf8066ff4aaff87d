//! Display formatting for dollar amounts and counts.

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;
const BILLION: u64 = 1_000_000_000;

/// Shown in a budget section whose department gets no general-fund money.
pub const NO_GENERAL_FUNDS: &str = "No $ from General Funds";

/// Abbreviates a dollar amount by truncating to its leading digits.
///
/// Amounts under a thousand are printed as-is. Thousands and millions keep
/// every digit above the unit (`123_456` is `"123 thousand"`). Billions
/// keep one decimal digit (`5_630_000_000` is `"5.6 billion"`). Lower
/// digits are dropped, never rounded, so `1_999_999` is `"1 million"`.
#[must_use]
pub fn format_magnitude(n: u64) -> String {
    if n >= BILLION {
        let tenths = n / (BILLION / 10);
        format!("{}.{} billion", tenths / 10, tenths % 10)
    } else if n >= MILLION {
        format!("{} million", n / MILLION)
    } else if n >= THOUSAND {
        format!("{} thousand", n / THOUSAND)
    } else {
        n.to_string()
    }
}

/// Formats a department budget: `"$"` plus [`format_magnitude`], or
/// [`NO_GENERAL_FUNDS`] for zero.
#[must_use]
pub fn format_dollars(n: u64) -> String {
    if n == 0 {
        NO_GENERAL_FUNDS.to_string()
    } else {
        format!("${}", format_magnitude(n))
    }
}

/// Inserts `,` thousands separators (`1234567` becomes `"1,234,567"`).
#[must_use]
pub fn format_with_commas(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}
