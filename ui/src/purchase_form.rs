//! The amount entry state behind the token purchase form.

use thiserror::Error;

/// Why an amount cannot be purchased. The `Display` text is shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AmountError {
    #[error("Amount must be greater than zero.")]
    NotPositive,
    #[error("Amount exceeds the maximum limit of {max}.")]
    ExceedsMax { max: f64 },
}

/// Checks `amount` against the purchasable range `(0, max_amount]`.
pub fn validate_amount(amount: f64, max_amount: f64) -> Result<(), AmountError> {
    if amount <= 0.0 {
        Err(AmountError::NotPositive)
    } else if amount > max_amount {
        Err(AmountError::ExceedsMax { max: max_amount })
    } else {
        Ok(())
    }
}

/// Parses free text the way a browser's `parseFloat` does: leading
/// whitespace is skipped and the longest numeric prefix wins.
///
/// Empty, unparseable and non-finite input yields 0.
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let numeric_len = trimmed
        .bytes()
        .take_while(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
        .count();
    let candidate = &trimmed[..numeric_len];

    let value = (1..=candidate.len())
        .rev()
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0);

    // normalize -0
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Amount, raw input text and validity of a purchase form.
///
/// The error state is recomputed on every amount mutation, including the
/// MAX shortcut. A freshly created form shows no error until first edited.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseForm {
    text: String,
    amount: f64,
    max_amount: f64,
    error: Option<AmountError>,
    touched: bool,
}

impl PurchaseForm {
    pub fn new(max_amount: f64) -> Self {
        Self {
            text: String::new(),
            amount: 0.0,
            max_amount,
            error: None,
            touched: false,
        }
    }

    /// Handles a change of the amount input.
    pub fn set_amount_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.amount = parse_amount(text);
        self.revalidate();
    }

    /// Handles the MAX button: the amount becomes exactly the maximum.
    pub fn fill_max(&mut self) {
        self.amount = self.max_amount;
        self.text = self.max_amount.to_string();
        self.revalidate();
    }

    /// Follows a change of the maximum, e.g. a refreshed wallet balance.
    pub fn set_max_amount(&mut self, max_amount: f64) {
        if self.max_amount == max_amount {
            return;
        }
        self.max_amount = max_amount;
        if self.touched {
            self.error = validate_amount(self.amount, self.max_amount).err();
        }
    }

    fn revalidate(&mut self) {
        self.touched = true;
        self.error = validate_amount(self.amount, self.max_amount).err();
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn max_amount(&self) -> f64 {
        self.max_amount
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&AmountError> {
        self.error.as_ref()
    }

    /// The amount to hand to the purchase callback, if it may be submitted.
    pub fn submission(&self) -> Option<f64> {
        validate_amount(self.amount, self.max_amount)
            .ok()
            .map(|_| self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn unparseable_text_is_zero() {
        for text in ["", "   ", "abc", ".", "-", "e5", "NaN", "inf", "Infinity", "1e999"] {
            assert_eq!(parse_amount(text), 0.0, "input {text:?}");
        }
    }

    #[test]
    fn parses_numeric_prefix() {
        assert_eq!(parse_amount("50"), 50.0);
        assert_eq!(parse_amount("  12.5"), 12.5);
        assert_eq!(parse_amount("12abc"), 12.0);
        assert_eq!(parse_amount("1e3"), 1000.0);
        assert_eq!(parse_amount("1e"), 1.0);
        assert_eq!(parse_amount("0."), 0.0);
        assert_eq!(parse_amount(".5"), 0.5);
        assert_eq!(parse_amount("-3"), -3.0);
        assert!(parse_amount("-0").is_sign_positive());
    }

    #[test]
    fn valid_amount_submits() {
        let mut form = PurchaseForm::new(100.0);
        form.set_amount_text("50");

        assert_eq!(form.amount(), 50.0);
        assert!(!form.is_error());
        assert_eq!(form.submission(), Some(50.0));
    }

    #[test]
    fn amount_over_max_is_blocked() {
        let mut form = PurchaseForm::new(100.0);
        form.set_amount_text("150");

        assert!(form.is_error());
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Amount exceeds the maximum limit of 100.")
        );
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn empty_input_resets_to_zero() {
        let mut form = PurchaseForm::new(100.0);
        form.set_amount_text("25");
        form.set_amount_text("");

        assert_eq!(form.amount(), 0.0);
        assert_eq!(form.error(), Some(&AmountError::NotPositive));
        assert_eq!(
            form.error().map(|e| e.to_string()).as_deref(),
            Some("Amount must be greater than zero.")
        );
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn pristine_form_shows_no_error_but_does_not_submit() {
        let form = PurchaseForm::new(100.0);
        assert!(!form.is_error());
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn max_fills_and_revalidates() {
        let mut form = PurchaseForm::new(42.5);
        form.set_amount_text("1000");
        assert!(form.is_error());

        form.fill_max();
        assert_eq!(form.amount(), 42.5);
        assert_eq!(form.text(), "42.5");
        assert!(!form.is_error());
        assert_eq!(form.submission(), Some(42.5));
    }

    #[test]
    fn max_of_zero_is_an_error() {
        let mut form = PurchaseForm::new(0.0);
        form.fill_max();

        assert_eq!(form.amount(), 0.0);
        assert_eq!(form.error(), Some(&AmountError::NotPositive));
        assert_eq!(form.submission(), None);
    }

    #[test]
    fn shrinking_max_invalidates_amount() {
        let mut form = PurchaseForm::new(100.0);
        form.set_amount_text("80");
        assert!(!form.is_error());

        form.set_max_amount(50.0);
        assert_eq!(form.error(), Some(&AmountError::ExceedsMax { max: 50.0 }));

        let mut pristine = PurchaseForm::new(100.0);
        pristine.set_max_amount(50.0);
        assert!(!pristine.is_error());
    }

    proptest! {
        #[test]
        fn error_iff_out_of_range(amount in -1.0e6..1.0e6f64, max in 0.0..1.0e6f64) {
            let mut form = PurchaseForm::new(max);
            form.set_amount_text(&amount.to_string());

            prop_assert_eq!(form.amount(), amount);
            prop_assert_eq!(form.is_error(), amount <= 0.0 || amount > max);
            prop_assert_eq!(form.submission().is_some(), !form.is_error());
        }

        #[test]
        fn garbage_is_zero(text in "[a-zA-Z ]*") {
            prop_assert_eq!(parse_amount(&text), 0.0);
        }
    }
}
