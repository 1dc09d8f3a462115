#[cfg(all(feature = "ja", feature = "en"))]
compile_error!("Cannot enable both 'ja' and 'en' features at the same time");

#[cfg(feature = "ja")]
pub mod strings {
    pub const PARTICIPANT: &str = "払う人";
    pub const BALANCE: &str = "額(円)";
    pub const AMOUNT_PAID: &str = "支払額";
    pub const AMOUNT_TO_PAY: &str = "割勘金額";
    pub const VALID: &str = "OK";

    pub const PAID_NON_NUMERIC: &str = "数字を入力してください";
    pub const PAID_NEGATIVE: &str = "正の値を入力してください";
    pub const PAID_NON_INTEGER: &str = "整数を入力してください";
    pub const TO_PAY_NON_NUMERIC: &str = "数字じゃないとダメ";
    pub const TO_PAY_NEGATIVE: &str = "0以上の値じゃないとダメ";
    pub const TO_PAY_NON_INTEGER: &str = "整数じゃないとダメ";
    pub const AMOUNT_TOO_LARGE: &str = "金額が大きすぎます";
    pub const SUM_MISMATCH: &str = "支払額と割勘金額の合計が一致していません";
    pub const NO_PARTICIPANTS: &str = "割り勘するメンバーがいません";
    pub const TOO_MANY_PARTICIPANTS: &str = "割り勘するメンバーが多すぎます";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const PARTICIPANT: &str = "Participant";
    pub const BALANCE: &str = "Amount (JPY)";
    pub const AMOUNT_PAID: &str = "Amount paid";
    pub const AMOUNT_TO_PAY: &str = "Amount to pay";
    pub const VALID: &str = "OK";

    pub const PAID_NON_NUMERIC: &str = "Please enter a number";
    pub const PAID_NEGATIVE: &str = "Please enter a positive value";
    pub const PAID_NON_INTEGER: &str = "Please enter an integer";
    pub const TO_PAY_NON_NUMERIC: &str = "Must be a number";
    pub const TO_PAY_NEGATIVE: &str = "Must be 0 or more";
    pub const TO_PAY_NON_INTEGER: &str = "Must be an integer";
    pub const AMOUNT_TOO_LARGE: &str = "The amount is too large";
    pub const SUM_MISMATCH: &str = "The totals of amount paid and amount to pay do not match";
    pub const NO_PARTICIPANTS: &str = "There are no members to split between";
    pub const TOO_MANY_PARTICIPANTS: &str = "There are too many members to split between";
}

#[cfg(not(any(feature = "ja", feature = "en")))]
pub mod strings {
    pub const PARTICIPANT: &str = "Participant";
    pub const BALANCE: &str = "Amount (JPY)";
    pub const AMOUNT_PAID: &str = "Amount paid";
    pub const AMOUNT_TO_PAY: &str = "Amount to pay";
    pub const VALID: &str = "OK";

    pub const PAID_NON_NUMERIC: &str = "Please enter a number";
    pub const PAID_NEGATIVE: &str = "Please enter a positive value";
    pub const PAID_NON_INTEGER: &str = "Please enter an integer";
    pub const TO_PAY_NON_NUMERIC: &str = "Must be a number";
    pub const TO_PAY_NEGATIVE: &str = "Must be 0 or more";
    pub const TO_PAY_NON_INTEGER: &str = "Must be an integer";
    pub const AMOUNT_TOO_LARGE: &str = "The amount is too large";
    pub const SUM_MISMATCH: &str = "The totals of amount paid and amount to pay do not match";
    pub const NO_PARTICIPANTS: &str = "There are no members to split between";
    pub const TOO_MANY_PARTICIPANTS: &str = "There are too many members to split between";
}

pub use strings::*;

pub struct SumMismatchMessage {
    paid: i64,
    owed: i64,
}

pub fn sum_mismatch(paid: i64, owed: i64) -> SumMismatchMessage {
    SumMismatchMessage { paid, owed }
}

#[cfg(feature = "ja")]
impl std::fmt::Display for SumMismatchMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{SUM_MISMATCH} (支払額 {}円 / 割勘金額 {}円)",
            self.paid, self.owed
        )
    }
}

#[cfg(feature = "en")]
impl std::fmt::Display for SumMismatchMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{SUM_MISMATCH} (paid {} / to pay {})",
            self.paid, self.owed
        )
    }
}

#[cfg(not(any(feature = "ja", feature = "en")))]
impl std::fmt::Display for SumMismatchMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{SUM_MISMATCH} (paid {} / to pay {})",
            self.paid, self.owed
        )
    }
}
