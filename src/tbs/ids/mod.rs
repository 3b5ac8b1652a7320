mod account_number;
mod national_id;

pub use account_number::AccountNumber;
pub use national_id::NationalId;
